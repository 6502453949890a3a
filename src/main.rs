use anyhow::Context;
use clap::Parser;
use johnek_common::contact::ContactForm;
use johnek_common::filter::FilterState;
use johnek_common::reveal::{reveal_at, RevealConfig};
use johnek_common::share::WhatsAppLink;
use johnek_site::{browse, cli, config, content_dir, error, inquiry, logging, preview};
use cli::{Cli, Commands, ItemKind};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(cli.verbose)?;
    let config = Config::load()?;
    let dir = config.resolve_content_dir(cli.content_dir.as_deref());

    // コンテンツを読むコマンドだけ読み込む
    let load = || {
        content_dir::load(&dir)
            .with_context(|| format!("コンテンツの読み込みに失敗: {}", dir.display()))
    };

    match cli.command {
        Commands::Projects { category, query } => {
            let data = load()?;
            print!("{}", browse::project_list(&data, &FilterState::new(category, query)));
        }

        Commands::Services { category, query } => {
            let data = load()?;
            print!("{}", browse::service_list(&data, &FilterState::new(category, query)));
        }

        Commands::Show { kind, slug } => {
            let data = load()?;
            let number = config.whatsapp_number();
            match kind {
                ItemKind::Project => {
                    let project = data.project(&slug).map_err(error::SiteError::from)?;
                    print!("{}", browse::project_detail(project, &number));
                }
                ItemKind::Service => {
                    let service = data.service(&slug).map_err(error::SiteError::from)?;
                    print!("{}", browse::service_detail(&data, service, &number));
                }
            }
        }

        Commands::Share { kind, slug } => {
            let data = load()?;
            let number = config.whatsapp_number();
            let link = match kind {
                ItemKind::Project => {
                    let project = data.project(&slug).map_err(error::SiteError::from)?;
                    WhatsAppLink::project_inquiry(&number, &project.name)
                }
                ItemKind::Service => {
                    let service = data.service(&slug).map_err(error::SiteError::from)?;
                    WhatsAppLink::service_inquiry(&number, &service.title)
                }
            };
            println!("{}", link.url());
        }

        Commands::Reveal { text, delay, looping, at, play, duration } => {
            let reveal = RevealConfig::new(delay.unwrap_or(config.reveal_delay_ms), looping);
            if play {
                let until = if looping { duration } else { u64::MAX };
                let mut stdout = std::io::stdout();
                preview::play(&mut stdout, &text, &reveal, until).await?;
            } else if let Some(at) = at {
                println!("{}", reveal_at(&text, at, &reveal));
            } else {
                for (at, shown) in preview::timeline(&text, &reveal, duration) {
                    println!("{:>6}ms  {}", at, shown);
                }
            }
        }

        Commands::Validate => {
            let data = load()?;
            let issues = content_dir::validate(&data);
            for issue in &issues {
                println!("{}", issue);
            }

            let errors = issues.iter().filter(|i| i.is_error()).count();
            if errors > 0 {
                return Err(error::SiteError::Validation(errors).into());
            }
            println!(
                "✔ {}件のプロジェクト、{}件のサービスを確認（警告{}件）",
                data.projects.projects.len(),
                data.services.services.len(),
                issues.len()
            );
        }

        Commands::Contact { name, email, subject, message } => {
            let form = ContactForm {
                name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                subject: subject.unwrap_or_default(),
                message: message.unwrap_or_default(),
            };
            let form = inquiry::complete_interactively(form)?;
            let result = inquiry::submit(&form).await?;
            println!("✔ {}", result);
        }

        Commands::Config { set_whatsapp_number, set_content_dir, show } => {
            let mut config = config;
            let changed = set_whatsapp_number.is_some() || set_content_dir.is_some();

            if let Some(number) = set_whatsapp_number {
                config.whatsapp_number = number;
            }
            if let Some(dir) = set_content_dir {
                config.content_dir = Some(dir);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  WhatsApp番号: {}", config.whatsapp_number());
                println!(
                    "  コンテンツフォルダ: {}",
                    config.resolve_content_dir(None).display()
                );
                println!("  文字表示間隔: {}ms", config.reveal_delay_ms);
            }
        }
    }

    Ok(())
}
