use clap::Parser;
use lookalike::{cli, config, downloader, error, viewer};
use cli::{Cli, Commands};
use config::Config;
use error::{LookalikeError, Result};
use lookalike_common::{validate, Dataset, View};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_path = config.resolve_data_path(cli.data.clone());

    match cli.command {
        Commands::List { query, json } => {
            let dataset = load_dataset(&data_path, cli.verbose)?;
            let view = viewer::list_view(dataset, query.as_deref());
            print_view(&view, json)?;
        }

        Commands::Show { name, json } => {
            let dataset = load_dataset(&data_path, cli.verbose)?;
            let view = viewer::show_view(dataset, &name)?;
            print_view(&view, json)?;
        }

        Commands::Compare { a, b, json } => {
            let dataset = load_dataset(&data_path, cli.verbose)?;
            let view = viewer::compare_view(dataset, &a, &b)?;
            print_view(&view, json)?;
        }

        Commands::Validate => {
            println!("🔍 lookalike - データセット検証\n");

            let dataset = load_dataset(&data_path, cli.verbose)?;
            println!("✔ {}件のアイドルを読み込み\n", dataset.len());

            let issues = validate(&dataset);
            if !issues.is_empty() {
                for issue in &issues {
                    eprintln!("  ✗ {}", issue);
                }
                return Err(LookalikeError::InvalidDataset(issues.len()));
            }

            println!("✅ 問題はありません");
        }

        Commands::FetchImages { profile_dir, concurrency } => {
            println!("📥 lookalike - プロフィール画像ダウンロード\n");

            let profile_dir = profile_dir.unwrap_or_else(|| config.profile_dir.clone());
            let concurrency = concurrency.unwrap_or(config.download_concurrency);

            // 1. members.json 読み込み
            println!("[1/2] members.json を読み込み中...");
            let jobs = downloader::collect_jobs(&profile_dir)?;
            println!("✔ {}件の画像\n", jobs.len());

            // 2. ダウンロード
            println!("[2/2] ダウンロード中...（同時{}件）", concurrency);
            let summary = downloader::download_all(jobs, concurrency, cli.verbose).await?;
            println!("✔ 保存: {}件 / 失敗: {}件", summary.saved, summary.failed.len());

            println!("\n✅ 完了");
        }

        Commands::Config { set_data_path, show } => {
            let mut config = config;

            if let Some(path) = set_data_path {
                config.set_data_path(path)?;
                println!("✔ データセットのパスを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データセット: {}", config.data_path.display());
                println!("  プロフィールフォルダ: {}", config.profile_dir.display());
                println!("  同時ダウンロード数: {}", config.download_concurrency);
                println!("  使用中のデータセット: {}", data_path.display());
            }
        }
    }

    Ok(())
}

fn load_dataset(path: &Path, verbose: bool) -> Result<Dataset> {
    if !path.exists() {
        return Err(LookalikeError::FileNotFound(path.display().to_string()));
    }
    if verbose {
        eprintln!("データセット読み込み: {}", path.display());
    }
    Ok(Dataset::from_file(path)?)
}

fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", viewer::TextView(view));
    }
    Ok(())
}
