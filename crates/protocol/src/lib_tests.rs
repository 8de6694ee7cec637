use super::*;
use serde_json::json;

#[test]
fn file_entry_uses_camel_case_fields() {
    let entry = FileEntry {
        name: "a.txt".into(),
        size: 2,
        created_at: None,
        modified_at: Some(DateTime::from_timestamp(0, 0).unwrap()),
        accessed_at: None,
        is_regular_file: true,
        extension: "txt".into(),
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "a.txt",
            "size": 2,
            "createdAt": null,
            "modifiedAt": "1970-01-01T00:00:00Z",
            "accessedAt": null,
            "isRegularFile": true,
            "extension": "txt",
        })
    );
}

#[test]
fn create_request_content_defaults_to_empty() {
    let req: CreateFileRequest = serde_json::from_str(r#"{"filename":"x"}"#).unwrap();
    assert_eq!(req.filename, "x");
    assert_eq!(req.content, "");
}

#[test]
fn create_request_requires_filename() {
    let cases = [r#"{}"#, r#"{"content":"hi"}"#, r#"{"filename":42}"#, r#"[1,2]"#];

    for body in cases {
        assert!(
            serde_json::from_str::<CreateFileRequest>(body).is_err(),
            "{body} should not deserialize"
        );
    }
}

#[test]
fn small_bodies_serialize_as_expected() {
    assert_eq!(
        serde_json::to_value(Outcome { success: true }).unwrap(),
        json!({"success": true})
    );
    assert_eq!(
        serde_json::to_value(ErrorBody::new(FILE_NOT_FOUND)).unwrap(),
        json!({"error": "File not found"})
    );
    assert_eq!(
        serde_json::to_value(FileContent {
            content: "hi".into(),
            filename: "a.txt".into(),
        })
        .unwrap(),
        json!({"content": "hi", "filename": "a.txt"})
    );
}
