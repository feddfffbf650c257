mod common;

use common::BODY;
use pinyin_core::persistence::load_from_disk;
use pinyin_core::{build_dictionary, DictError, DictGenerator, GeneratorConfig};
use std::fs;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn config_in(dir: &Path, expected_min: usize) -> GeneratorConfig {
    GeneratorConfig {
        output_path: dir.join("pinyinDict.json"),
        expected_min_characters: expected_min,
        ..GeneratorConfig::default()
    }
}

#[test]
fn fold_counts_entries_and_skipped_lines() {
    let outcome = build_dictionary(BODY);
    assert_eq!(outcome.dict.len(), 5);
    assert_eq!(outcome.skipped, 3);

    let keys: String = outcome.dict.iter().map(|(ch, _)| ch).collect();
    assert_eq!(keys, "中国\u{20000}文人");
    assert_eq!(outcome.dict.get('中'), Some(&["zhòng".to_string()][..]));
}

#[test]
fn generated_file_matches_fold() {
    let dir = tempfile::tempdir().unwrap();
    let generator = DictGenerator::new(config_in(dir.path(), 5));

    let summary = generator.generate_from_body(BODY).unwrap();
    assert_eq!(summary.characters, 5);
    assert_eq!(summary.skipped_lines, 3);
    assert!(summary.is_complete());

    let written = load_from_disk(&summary.output_path).unwrap();
    assert_eq!(written, build_dictionary(BODY).dict);

    let text = fs::read_to_string(&summary.output_path).unwrap();
    assert!(text.starts_with("{\n  \"中\": [\n    \"zhòng\"\n  ],"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn each_run_regenerates_from_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let generator = DictGenerator::new(config_in(dir.path(), 1));

    generator.generate_from_body(BODY).unwrap();
    let summary = generator.generate_from_body("U+4E00: yī  # 一\n").unwrap();

    let written = load_from_disk(&summary.output_path).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written.get('一').is_some());
}

async fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{}/pinyin.txt", addr)
}

#[tokio::test]
async fn run_fetches_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let url = serve_once(BODY).await;
    let generator = DictGenerator::new(GeneratorConfig {
        source_url: url,
        ..config_in(dir.path(), 41651)
    });

    let summary = generator.run().await.unwrap();
    assert_eq!(summary.characters, 5);
    assert!(!summary.is_complete());
    assert!(summary.output_path.exists());
}

#[tokio::test]
async fn fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generator = DictGenerator::new(GeneratorConfig {
        source_url: format!("http://{}/pinyin.txt", addr),
        ..config_in(dir.path(), 1)
    });

    assert!(matches!(
        generator.run().await,
        Err(DictError::Network { .. })
    ));
    assert!(!generator.config().output_path.exists());
}
