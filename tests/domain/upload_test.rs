use doc2quiz::domain::Upload;

#[tokio::test]
async fn given_staged_bytes_when_reading_then_returns_same_content() {
    let upload = Upload::from_bytes("notes.txt", b"hello world").unwrap();

    assert_eq!(upload.filename(), "notes.txt");
    assert_eq!(upload.size_bytes(), 11);
    assert_eq!(upload.read_bytes().await.unwrap(), b"hello world");
}

#[test]
fn given_released_upload_when_checking_path_then_file_is_gone() {
    let upload = Upload::from_bytes("notes.txt", b"content").unwrap();
    let path = upload.path().to_path_buf();
    assert!(path.exists());

    upload.release().unwrap();

    assert!(!path.exists());
}

#[test]
fn given_dropped_upload_when_checking_path_then_file_is_gone() {
    let upload = Upload::create("notes.txt").unwrap();
    let path = upload.path().to_path_buf();

    drop(upload);

    assert!(!path.exists());
}

#[tokio::test]
async fn given_chunks_past_limit_when_appending_then_counts_without_writing() {
    let mut upload = Upload::create("big.txt").unwrap();

    assert!(upload.append_within_limit(b"12345", 8).unwrap());
    assert!(upload.append_within_limit(b"678", 8).unwrap());
    assert!(!upload.append_within_limit(b"9", 8).unwrap());

    assert_eq!(upload.size_bytes(), 9);
    assert_eq!(upload.read_bytes().await.unwrap(), b"12345678");
}
