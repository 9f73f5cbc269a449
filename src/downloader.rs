//! プロフィール画像ダウンロード
//!
//! `<profile_dir>/<group>/members.json` を読み、各メンバーの画像を
//! `<profile_dir>/<group>/<name>/<ファイル名>` に保存する。

use crate::error::{LookalikeError, Result};
use anyhow::Context;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

const MEMBERS_FILE_NAME: &str = "members.json";

/// members.json の1要素
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
}

/// ダウンロード1件分
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadJob {
    pub name: String,
    pub url: String,
    pub dest: PathBuf,
}

/// ダウンロード結果の集計
#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub saved: usize,
    pub failed: Vec<String>,
}

/// プロフィールフォルダ直下の各グループからジョブを集める
///
/// 名前かURLが空のメンバーは飛ばす。
pub fn collect_jobs(profile_dir: &Path) -> Result<Vec<DownloadJob>> {
    if !profile_dir.is_dir() {
        return Err(LookalikeError::FolderNotFound(profile_dir.display().to_string()));
    }

    let mut jobs = Vec::new();

    for entry in WalkDir::new(profile_dir)
        .min_depth(1)
        .max_depth(1)  // グループフォルダのみ
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let group_dir = entry.path();
        let members_path = group_dir.join(MEMBERS_FILE_NAME);
        if !group_dir.is_dir() || !members_path.exists() {
            continue;
        }

        let content = std::fs::read_to_string(&members_path)?;
        let members: Vec<Member> = serde_json::from_str(&content)?;
        println!(
            "{}: {} profile images",
            entry.file_name().to_string_lossy(),
            members.len()
        );

        for member in members {
            if member.name.is_empty() || member.image_url.is_empty() {
                continue;
            }
            let Some(file_name) = image_file_name(&member.image_url) else {
                eprintln!("[skip] {} ファイル名を取得できません: {}", member.name, member.image_url);
                continue;
            };
            jobs.push(DownloadJob {
                dest: group_dir.join(&member.name).join(file_name),
                name: member.name,
                url: member.image_url,
            });
        }
    }

    Ok(jobs)
}

/// URLのパス部分の末尾をファイル名として取り出す（前後の空白は除去）
pub fn image_file_name(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let last = parsed.path_segments()?.last()?.trim().to_string();
    if last.is_empty() {
        None
    } else {
        Some(last)
    }
}

/// 全ジョブを並列にダウンロード。個別の失敗は記録して続行する
pub async fn download_all(
    jobs: Vec<DownloadJob>,
    concurrency: usize,
    verbose: bool,
) -> Result<DownloadSummary> {
    let client = reqwest::Client::new();
    let pb = ProgressBar::new(jobs.len() as u64);
    pb.enable_steady_tick(Duration::from_millis(200));
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
            .map_err(|e| LookalikeError::Download(format!("プログレスバーの作成に失敗: {}", e)))?
            .progress_chars("#>-"),
    );

    let mut results = stream::iter(jobs)
        .map(|job| {
            let client = client.clone();
            async move {
                let result = download_one(&client, &job).await;
                (job, result)
            }
        })
        .buffer_unordered(concurrency.max(1));

    let mut summary = DownloadSummary::default();
    while let Some((job, result)) = results.next().await {
        match result {
            Ok(()) => {
                summary.saved += 1;
                if verbose {
                    pb.println(format!("[save] {} {}", job.name, job.dest.display()));
                }
            }
            Err(e) => {
                pb.println(format!("[fail] {}", job.url));
                if verbose {
                    pb.println(format!("  {:#}", e));
                }
                summary.failed.push(job.url);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(summary)
}

async fn download_one(client: &reqwest::Client, job: &DownloadJob) -> anyhow::Result<()> {
    let response = client
        .get(&job.url)
        .send()
        .await
        .with_context(|| format!("リクエスト失敗: {}", job.url))?
        .error_for_status()?;
    let bytes = response.bytes().await.context("レスポンスの読み込みに失敗")?;

    if let Some(parent) = job.dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("フォルダ作成失敗: {}", parent.display()))?;
    }
    tokio::fs::write(&job.dest, &bytes)
        .await
        .with_context(|| format!("保存失敗: {}", job.dest.display()))?;

    Ok(())
}
