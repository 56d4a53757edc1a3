use std::time::Duration;

use manifest::Hash;
use netlify_client::{Client, ClientError, Site};
use testing::{Response, TestHttpServer, file_tree};

fn client_for(server: &TestHttpServer) -> Client {
    Client::builder("auth-token")
        .host(server.base_url())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("able to build client")
}

#[test]
fn empty_folder_makes_no_network_calls() {
    let dir = tempfile::tempdir().unwrap();
    let server = TestHttpServer::spawn(|_| Response::json(500, "{}"));
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    assert_eq!(result, None);
    assert!(server.requests().is_empty());
}

#[test]
fn folder_of_empty_directories_makes_no_network_calls() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("assets/img")).unwrap();
    let server = TestHttpServer::spawn(|_| Response::json(500, "{}"));
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    assert_eq!(result, None);
    assert!(server.requests().is_empty());
}

#[test]
fn nothing_required_returns_deploy_id_without_uploads() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("index.html", b"<html></html>")]).unwrap();
    let server = TestHttpServer::spawn(|req| {
        match (req.method.as_str(), req.target.as_str()) {
            ("POST", "/sites/site_id/deploys?access_token=auth-token") => {
                Response::json(200, r#"{"id": "dep1", "required": []}"#)
            }
            _ => Response::json(404, "{}"),
        }
    });
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    assert_eq!(result, Some("dep1".to_string()));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let hash = Hash::new(b"<html></html>").to_string();
    assert_eq!(body, serde_json::json!({"files": {"/index.html": hash}}));
}

#[test]
fn force_all_uploads_every_file_despite_empty_required() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("index.html", b"<html></html>")]).unwrap();
    let server = TestHttpServer::spawn(|req| {
        match (req.method.as_str(), req.target.as_str()) {
            ("POST", "/sites/site_id/deploys?access_token=auth-token") => {
                Response::json(200, r#"{"id": "dep1", "required": []}"#)
            }
            ("PUT", "/deploys/dep1/files/index.html?access_token=auth-token") => {
                Response::json(200, "{}")
            }
            _ => Response::json(404, "{}"),
        }
    });
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), true)
        .unwrap();

    assert_eq!(result, Some("dep1".to_string()));
    let requests = server.requests();
    assert_eq!(requests.len(), 2);

    let upload = &requests[1];
    assert_eq!(upload.method, "PUT");
    assert_eq!(
        upload.target,
        "/deploys/dep1/files/index.html?access_token=auth-token"
    );
    assert_eq!(upload.body, b"<html></html>");
    assert_eq!(upload.header("content-type"), Some("application/octet-stream"));
}

#[test]
fn uploads_only_files_whose_hash_is_required() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("a.txt", b"alpha"), ("b.txt", b"beta")]).unwrap();

    let create_body = format!(
        r#"{{"id": "dep2", "required": ["{}"]}}"#,
        Hash::new(b"alpha")
    );
    let server = TestHttpServer::spawn(move |req| match req.method.as_str() {
        "POST" => Response::json(201, create_body.clone()),
        "PUT" => Response::json(200, "{}"),
        _ => Response::json(404, "{}"),
    });
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    assert_eq!(result, Some("dep2".to_string()));
    let puts: Vec<_> = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "PUT")
        .collect();
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].target,
        "/deploys/dep2/files/a.txt?access_token=auth-token"
    );
    assert_eq!(puts[0].body, b"alpha");
}

#[test]
fn duplicate_content_uploads_every_matching_path() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(
        dir.path(),
        &[("a.txt", b"same bytes"), ("copy/a.txt", b"same bytes")],
    )
    .unwrap();

    let create_body = format!(
        r#"{{"id": "dep3", "required": ["{}"]}}"#,
        Hash::new(b"same bytes")
    );
    let server = TestHttpServer::spawn(move |req| match req.method.as_str() {
        "POST" => Response::json(201, create_body.clone()),
        "PUT" => Response::json(200, "{}"),
        _ => Response::json(404, "{}"),
    });
    let client = client_for(&server);

    let result = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    assert_eq!(result, Some("dep3".to_string()));
    let mut targets: Vec<_> = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "PUT")
        .map(|r| r.target)
        .collect();
    targets.sort();
    assert_eq!(
        targets,
        vec![
            "/deploys/dep3/files/a.txt?access_token=auth-token".to_string(),
            "/deploys/dep3/files/copy/a.txt?access_token=auth-token".to_string(),
        ]
    );
}

#[test]
fn upload_paths_are_percent_encoded() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("assets/press kit.zip", b"zipbytes")]).unwrap();

    let create_body = format!(
        r#"{{"id": "dep4", "required": ["{}"]}}"#,
        Hash::new(b"zipbytes")
    );
    let server = TestHttpServer::spawn(move |req| match req.method.as_str() {
        "POST" => Response::json(201, create_body.clone()),
        "PUT" => Response::json(200, "{}"),
        _ => Response::json(404, "{}"),
    });
    let client = client_for(&server);

    client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap();

    let puts: Vec<_> = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "PUT")
        .collect();
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].target,
        "/deploys/dep4/files/assets/press%20kit.zip?access_token=auth-token"
    );
}

#[test]
fn first_upload_failure_aborts_remaining_uploads() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("a.txt", b"alpha"), ("b.txt", b"beta")]).unwrap();

    let create_body = format!(
        r#"{{"id": "dep5", "required": ["{}", "{}"]}}"#,
        Hash::new(b"alpha"),
        Hash::new(b"beta")
    );
    let server = TestHttpServer::spawn(move |req| match req.method.as_str() {
        "POST" => Response::json(201, create_body.clone()),
        "PUT" => Response::json(500, r#"{"message": "storage unavailable"}"#),
        _ => Response::json(404, "{}"),
    });
    let client = client_for(&server);

    let err = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::HttpError { status, .. } if status.as_u16() == 500
    ));
    let puts = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "PUT")
        .count();
    assert_eq!(puts, 1);
}

#[test]
fn create_deploy_failure_surfaces_status() {
    let dir = tempfile::tempdir().unwrap();
    file_tree(dir.path(), &[("index.html", b"<html></html>")]).unwrap();
    let server = TestHttpServer::spawn(|_| Response::json(422, r#"{"message": "bad manifest"}"#));
    let client = client_for(&server);

    let err = client
        .deploy_folder(dir.path(), &Site::from_id("site_id"), false)
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::HttpError { status, .. } if status.as_u16() == 422
    ));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn missing_folder_fails_without_network_calls() {
    let dir = tempfile::tempdir().unwrap();
    let server = TestHttpServer::spawn(|_| Response::json(500, "{}"));
    let client = client_for(&server);

    let err = client
        .deploy_folder(&dir.path().join("nope"), &Site::from_id("site_id"), false)
        .unwrap_err();

    assert!(matches!(err, ClientError::ManifestError(_)));
    assert!(server.requests().is_empty());
}
