pub mod deploy;
pub mod sites;
