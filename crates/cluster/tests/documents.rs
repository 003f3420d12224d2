use birthday_cluster::{
    AutoscaleFormula, ClusterConfig, ClusterError, ConfigDocument, Credentials, DocumentPaths,
    NodeRange, generate_templates, load_documents,
};

fn sample_cluster() -> ClusterConfig {
    ClusterConfig::builder("birthday-sim", "Standard_F4s_v2")
        .with_max_tasks_per_node(4)
        .with_dedicated_nodes(NodeRange::new(0, 8))
        .with_low_priority_nodes(NodeRange::new(0, 16))
        .with_autoscale_formula(AutoscaleFormula::QueueAndRunning)
        .with_container_image("birthday/worker:latest")
        .with_package("rand")
        .build()
        .unwrap()
}

#[test]
fn test_cluster_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ClusterConfig::FILE_NAME);

    let cluster = sample_cluster();
    cluster.write_json(&path).unwrap();
    let back = ClusterConfig::read_json(&path).unwrap();

    assert_eq!(back, cluster);
    assert_eq!(back.max_concurrent_tasks(), 4 * 24);
}

#[test]
fn test_json_uses_camel_case_keys() {
    let json = sample_cluster().to_json_pretty().unwrap();
    assert!(json.contains("\"vmSize\""));
    assert!(json.contains("\"maxTasksPerNode\""));
    assert!(json.contains("\"QUEUE_AND_RUNNING\""));
}

#[test]
fn test_unknown_field_rejected() {
    let mut value: serde_json::Value =
        serde_json::from_str(&sample_cluster().to_json_pretty().unwrap()).unwrap();
    value["rPackages"] = serde_json::json!(["ggplot2"]);

    let err = ClusterConfig::from_json_str(&value.to_string()).unwrap_err();
    assert!(matches!(err, ClusterError::Json { .. }));
}

#[test]
fn test_invalid_document_rejected_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(ClusterConfig::FILE_NAME);

    let mut value: serde_json::Value =
        serde_json::from_str(&sample_cluster().to_json_pretty().unwrap()).unwrap();
    value["maxTasksPerNode"] = serde_json::json!(0);
    std::fs::write(&path, value.to_string()).unwrap();

    let err = ClusterConfig::read_json(&path).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidTasksPerNode { value: 0 }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Credentials::read_json(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ClusterError::Io { .. }));
}

#[test]
fn test_templates_generate_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("cloud");

    let paths = generate_templates(&target, false).unwrap();
    assert_eq!(paths, DocumentPaths::in_dir(&target));
    assert!(paths.credentials.is_file());
    assert!(paths.cluster.is_file());

    let (credentials, cluster) = load_documents(&target).unwrap();
    assert_eq!(credentials, Credentials::template());
    assert_eq!(cluster, ClusterConfig::template());
}

#[test]
fn test_templates_refuse_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DocumentPaths::in_dir(dir.path());

    sample_cluster().write_json(&paths.cluster).unwrap();

    let err = generate_templates(dir.path(), false).unwrap_err();
    assert!(matches!(err, ClusterError::AlreadyExists { .. }));
    // nothing written when refusing
    assert!(!paths.credentials.exists());
    assert_eq!(ClusterConfig::read_json(&paths.cluster).unwrap(), sample_cluster());

    generate_templates(dir.path(), true).unwrap();
    assert_eq!(
        ClusterConfig::read_json(&paths.cluster).unwrap(),
        ClusterConfig::template()
    );
}
