//! 画像ダウンロードのジョブ収集テスト

use lookalike::downloader::{collect_jobs, DownloadJob};
use tempfile::tempdir;

#[test]
fn test_collect_jobs_from_members_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let twice = dir.path().join("twice");
    std::fs::create_dir(&twice).unwrap();
    std::fs::write(
        twice.join("members.json"),
        r#"[
            {"name": "Nayeon", "imageURL": "https://example.com/img/nayeon.jpg"},
            {"name": "", "imageURL": "https://example.com/img/empty.jpg"},
            {"name": "Momo", "imageURL": ""}
        ]"#,
    )
    .unwrap();

    let jobs = collect_jobs(dir.path()).expect("ジョブ収集失敗");
    assert_eq!(
        jobs,
        vec![DownloadJob {
            name: "Nayeon".into(),
            url: "https://example.com/img/nayeon.jpg".into(),
            dest: twice.join("Nayeon").join("nayeon.jpg"),
        }]
    );
}

#[test]
fn test_collect_jobs_skips_groups_without_members_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::create_dir(dir.path().join("empty-group")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let jobs = collect_jobs(dir.path()).expect("ジョブ収集失敗");
    assert!(jobs.is_empty());
}

#[test]
fn test_collect_jobs_orders_groups_by_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    for (group, name) in [("twice", "Sana"), ("blackpink", "Lisa")] {
        let group_dir = dir.path().join(group);
        std::fs::create_dir(&group_dir).unwrap();
        std::fs::write(
            group_dir.join("members.json"),
            format!(r#"[{{"name": "{}", "imageURL": "https://example.com/{}.png"}}]"#, name, name),
        )
        .unwrap();
    }

    let names: Vec<String> = collect_jobs(dir.path())
        .unwrap()
        .into_iter()
        .map(|job| job.name)
        .collect();
    assert_eq!(names, vec!["Lisa", "Sana"]);
}
