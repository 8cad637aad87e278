mod config;
mod error;
mod feedback;
mod models;
mod service;
mod store;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use config::Config;
use feedback::{Criteria, IssueTypeFilter, NewFeedback, StatusFilter};
use models::{seed, Feedback, FeedbackStatus, Urgency, UserRole, ISSUE_TYPES};
use serde::Serialize;
use service::FeedbackService;
use store::{FeedbackStore, HttpStore, MemoryStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Community feedback tracker
#[derive(Parser, Debug)]
#[command(name = "civic-feedback", version, about, long_about = None)]
struct Cli {
    /// Base URL of a remote feedback service (demo data is used otherwise)
    #[arg(long, global = true, env = config::REMOTE_URL_VAR)]
    remote: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse reports, most urgent first
    Explore {
        /// Text to look for in title, description or address
        #[arg(short, long, default_value = "")]
        search: String,

        /// pending, in-progress, resolved or all
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Issue type, or all
        #[arg(long, default_value = "all")]
        issue_type: String,
    },

    /// Show one report with its comments
    Show { id: String },

    /// Change the status of a report
    Status {
        id: String,
        status: FeedbackStatus,

        /// Acting user
        #[arg(long = "as", default_value = "admin1")]
        actor: String,
    },

    /// Comment on a report
    Comment {
        id: String,
        content: String,

        /// Acting user
        #[arg(long = "as", default_value = "admin1")]
        actor: String,
    },

    /// Reports submitted by a user
    Mine { user_id: String },

    /// Status counts and the full list
    Dashboard,

    /// Statistics by issue type and status
    Reports,

    /// Submit a new report
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        issue_type: String,
        #[arg(long)]
        urgency: Option<Urgency>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,
        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,
        /// Image reference, may be repeated
        #[arg(long = "image")]
        images: Vec<String>,
        /// Agree to share the report with local authorities
        #[arg(long)]
        consent: bool,
    },

    /// List the suggested issue types
    IssueTypes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if cli.remote.is_some() {
        config.remote_url = cli.remote.clone();
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &config.remote_url {
        Some(url) => {
            let store = HttpStore::new(url, &config)?;
            run(FeedbackService::new(store, seed::users()), cli).await
        }
        None => run(FeedbackService::new(MemoryStore::seeded(), seed::users()), cli).await,
    }
}

async fn run<S: FeedbackStore>(service: FeedbackService<S>, cli: Cli) -> Result<()> {
    info!("Using {} feedback store", service.store().store_name());
    let json = cli.json;

    match cli.command {
        Command::Explore {
            search,
            status,
            issue_type,
        } => {
            let criteria = Criteria::default()
                .with_search(search)
                .with_status(status)
                .with_issue_type(IssueTypeFilter::from(issue_type.as_str()));
            let listing = service.explore(&criteria).await?;

            if json {
                return print_json(&listing.items);
            }
            println!(
                "Showing {} of {} total issues\n",
                listing.items.len(),
                listing.total
            );
            if listing.items.is_empty() {
                println!("No issues found. {}", listing.empty_hint());
            }
            print_list(&listing.items);
        }

        Command::Show { id } => {
            let record = service.detail(&id).await?;
            if json {
                return print_json(&record);
            }
            print_detail(&record);
        }

        Command::Status { id, status, actor } => {
            if service.user(&actor)?.role != UserRole::Admin {
                bail!("Only administrators can change the status of feedback");
            }
            let record = service.update_status(&id, status).await?;
            if json {
                return print_json(&record);
            }
            println!("Feedback status changed to {}.", record.status);
        }

        Command::Comment { id, content, actor } => {
            let record = service.add_comment(&id, &content, &actor).await?;
            if json {
                return print_json(&record);
            }
            println!("Comment added to \"{}\".", record.title);
        }

        Command::Mine { user_id } => {
            let records = service.submissions_of(&user_id).await?;
            if json {
                return print_json(&records);
            }
            if records.is_empty() {
                println!("You haven't submitted any feedback yet.");
            }
            print_list(&records);
        }

        Command::Dashboard => {
            let counts = service.dashboard().await?;
            let listing = service.explore(&Criteria::default()).await?;
            if json {
                return print_json(&counts);
            }
            for status in FeedbackStatus::ALL {
                println!("{:<12} {}", status.label(), counts.get(status));
            }
            println!("{:<12} {}\n", "Total", counts.total());
            print_list(&listing.items);
        }

        Command::Reports => {
            let summary = service.report().await?;
            if json {
                return print_json(&summary);
            }
            println!("Total reports:   {}", summary.total());
            println!("Resolution rate: {}%\n", summary.resolution_rate);
            println!("By issue type:");
            for (name, count) in &summary.issue_types {
                println!("   {:<18} {}", name, count);
            }
            println!("By status:");
            for status in FeedbackStatus::ALL {
                println!("   {:<18} {}", status.label(), summary.statuses.get(status));
            }
        }

        Command::Submit {
            title,
            description,
            address,
            issue_type,
            urgency,
            name,
            phone,
            user,
            latitude,
            longitude,
            images,
            consent,
        } => {
            let mut form = NewFeedback::new(title, description, address, issue_type);
            form.urgency = urgency;
            form.name = name;
            form.phone = phone;
            form.user_id = user;
            form.latitude = latitude;
            form.longitude = longitude;
            form.images = images;
            form.consent = consent;

            let record = service.submit(form).await?;
            if json {
                return print_json(&record);
            }
            println!("Feedback submitted successfully! Reference: {}", record.id);
        }

        Command::IssueTypes => {
            if json {
                return print_json(&ISSUE_TYPES);
            }
            for issue_type in ISSUE_TYPES {
                println!("{issue_type}");
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(records: &[Feedback]) {
    for (i, record) in records.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, record.title, record.id);
        println!(
            "   {} · {} urgency · {}",
            record.status.label(),
            record.urgency,
            record.issue_type
        );
        println!("   {}", record.location.address);
        println!("   Reported {}", record.created_at.format("%b %-d, %Y"));
        println!();
    }
}

fn print_detail(record: &Feedback) {
    println!("{} [{}]", record.title, record.id);
    println!("Status:    {}", record.status.label());
    println!("Urgency:   {}", record.urgency);
    println!("Type:      {}", record.issue_type);
    println!("Location:  {}", record.location.address);
    if let Some((lat, lng)) = record.location.coordinates() {
        println!("           ({lat:.6}, {lng:.6})");
    }
    println!("Submitted: {}", record.created_at.format("%B %-d, %Y %H:%M"));
    println!("Updated:   {}", record.updated_at.format("%B %-d, %Y %H:%M"));
    if let Some(submitter) = &record.submitted_by {
        println!(
            "By:        {}",
            submitter.name.as_deref().unwrap_or("Anonymous")
        );
    }
    if let Some(assignee) = &record.assigned_to {
        println!("Assigned:  {assignee}");
    }
    if !record.images.is_empty() {
        println!("Images:    {}", record.images.join(", "));
    }
    println!("\n{}\n", record.description);

    if record.comments.is_empty() {
        println!("No comments yet");
    }
    for comment in &record.comments {
        println!(
            "- {} ({}, {}): {}",
            comment.author.name,
            comment.author.role,
            comment.created_at.format("%b %-d, %Y %H:%M"),
            comment.content
        );
    }
}
