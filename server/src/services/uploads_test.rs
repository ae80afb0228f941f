use super::*;

#[test]
fn sanitize_keeps_safe_characters() {
    assert_eq!(sanitize_filename("PO-2024_01.pdf"), "PO-2024_01.pdf");
}

#[test]
fn sanitize_replaces_spaces_and_symbols() {
    assert_eq!(sanitize_filename("scan (1) #2.png"), "scan__1___2.png");
}

#[test]
fn sanitize_strips_directories() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename(r"C:\Users\me\invoice.pdf"), "invoice.pdf");
}

#[test]
fn sanitize_strips_leading_dots() {
    assert_eq!(sanitize_filename(".env"), "env");
    assert_eq!(sanitize_filename(".."), "upload");
}

#[test]
fn sanitize_falls_back_for_empty_names() {
    assert_eq!(sanitize_filename(""), "upload");
    assert_eq!(sanitize_filename("dir/"), "upload");
}

#[test]
fn sanitize_truncates_long_names() {
    let long = "a".repeat(200);
    assert_eq!(sanitize_filename(&long).len(), MAX_NAME_LEN);
}

#[test]
fn storage_path_nests_under_resource() {
    let path = storage_path("grns", "note.pdf");
    assert!(path.starts_with("grns/"));
    assert!(path.ends_with("-note.pdf"));
}

#[tokio::test]
async fn store_writes_file_and_returns_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    let relative = store(dir.path(), "purchase-orders", "po.pdf", b"%PDF").await.unwrap();
    let written = tokio::fs::read(dir.path().join(&relative)).await.unwrap();
    assert_eq!(written, b"%PDF");
    assert!(relative.starts_with("purchase-orders/"));
}

#[tokio::test]
async fn discard_removes_stored_file() {
    let dir = tempfile::tempdir().unwrap();
    let relative = store(dir.path(), "grns", "challan.pdf", b"%PDF").await.unwrap();
    discard(dir.path(), &relative).await;
    assert!(!dir.path().join(&relative).exists());
}

#[tokio::test]
async fn discard_tolerates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    discard(dir.path(), "grns/missing.pdf").await;
}
