use chrono::{Datelike, Utc};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use steamfolio::models::UserProfile;
use steamfolio::{
    classify, BadgeDescriptor, Config, GitHubClient, ProfileAggregator, SiteContent, SITE,
};

#[derive(Parser, Debug)]
#[command(name = "steamfolio")]
#[command(version = "0.1.0")]
#[command(about = "Render a Steam-style developer profile card from GitHub data")]
struct Args {
    /// GitHub account to render (defaults to the site owner)
    #[arg(short, long)]
    username: Option<String>,

    /// Output format (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("steamfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    let config = Config::from_env();
    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set, calling the API unauthenticated");
    }

    let username = args
        .username
        .clone()
        .unwrap_or_else(|| SITE.account.to_string());

    let github = GitHubClient::new(config.github_token.as_deref())?;
    let aggregator = ProfileAggregator::new(github);

    // The spinner is the page's loading flag: on before the pass starts,
    // cleared once it completes, success or failure.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Fetching GitHub data for {}", username));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let outcome = aggregator.aggregate(&username).await;
    spinner.finish_and_clear();

    // The card renders either way; a failed pass degrades to the static
    // content with a visible notice instead of aborting.
    let (profile, failure) = match outcome {
        Ok(profile) => (Some(profile), None),
        Err(err) => {
            tracing::error!("Aggregation failed: {}", err);
            if err.is_rate_limited() {
                tracing::warn!("Set GITHUB_TOKEN to raise the API rate limit");
            }
            (None, Some(err.to_string()))
        }
    };

    let badge = classify(profile.as_ref().map(|p| p.stats.merge_commit_count));

    let card = match args.format.as_str() {
        "json" => format_json(profile.as_ref(), &badge, failure.as_deref())?,
        "markdown" => format_markdown(&SITE, profile.as_ref(), &badge, failure.as_deref()),
        _ => format_text(&SITE, profile.as_ref(), &badge, failure.as_deref()),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &card)?;
        tracing::info!("Card written to: {}", path);
    } else {
        println!("{}", card);
    }

    Ok(())
}

fn format_text(
    site: &SiteContent,
    profile: Option<&UserProfile>,
    badge: &BadgeDescriptor,
    failure: Option<&str>,
) -> String {
    let year = Utc::now().year();
    let mut output = String::new();

    let nickname = profile
        .and_then(|p| p.user.name.as_deref())
        .unwrap_or(site.owner);

    output.push_str(&format!(
        "\n=== {} | Level {} ===\n\n",
        nickname,
        site.level(year)
    ));
    output.push_str(&format!("{} [{}]", site.display_name, site.flag));
    if let Some(location) = profile.and_then(|p| p.user.location.as_deref()) {
        output.push_str(&format!(" - {}", location));
    }
    output.push('\n');
    if let Some(bio) = profile.and_then(|p| p.user.bio.as_deref()) {
        output.push_str(&format!("{}\n", bio));
    }
    output.push_str(&format!("{}\n", site.tagline));
    output.push_str(&format!("View more info: {}\n", site.github_url()));

    output.push_str(&format!(
        "\nBadge: {} - {} XP\n",
        site.badge_title, site.badge_xp
    ));
    output.push_str(&format!(
        "Years of service: {}\n",
        site.years_of_service(year)
    ));
    output.push_str(&format!("Commit badge: {}\n", badge.label));

    match profile {
        Some(profile) => {
            output.push_str("\nCurrently Online\n");
            output.push_str(&format!(
                "  Public Repositories: {}\n",
                profile.user.public_repos
            ));
            output.push_str(&format!("  Total Stars: {}\n", profile.stats.total_stars));
            output.push_str(&format!(
                "  Merge Commits: {}\n",
                profile.stats.merge_commit_count
            ));
            output.push_str(&format!("  Following: {}\n", profile.user.following));
            output.push_str(&format!("  Followers: {}\n", profile.user.followers));
            if let Some(ref language) = profile.stats.dominant_language {
                output.push_str(&format!(
                    "  Top Language: {} ({})\n",
                    language.name, language.percentage
                ));
            }
        }
        None => {
            output.push_str(&format!(
                "\nGitHub data unavailable: {}\n",
                failure.unwrap_or("unknown error")
            ));
        }
    }

    output.push_str("\nAbout me\n");
    output.push_str(&format!("  {}\n", site.about));

    output.push_str("\nTechnologies\n");
    for technology in site.technologies {
        output.push_str(&format!("  - {}\n", technology));
    }

    output.push_str("\nPublications\n");
    for (title, url) in site.publications {
        output.push_str(&format!("  × {}\n    {}\n", title, url));
    }

    output.push_str("\nTop Repositories\n");
    for (name, url) in site.top_repositories {
        output.push_str(&format!("  - {}: {}\n", name, url));
    }

    output.push_str("\nLinks\n");
    output.push_str(&format!("  GitHub:   {}\n", site.github_url()));
    output.push_str(&format!("  LinkedIn: {}\n", site.linkedin_url));
    output.push_str(&format!("  X:        {}\n", site.twitter_url));

    output.push_str(&format!(
        "\n© {} - {} {}\n",
        site.copyright_since, year, site.owner
    ));

    output
}

fn format_markdown(
    site: &SiteContent,
    profile: Option<&UserProfile>,
    badge: &BadgeDescriptor,
    failure: Option<&str>,
) -> String {
    let year = Utc::now().year();
    let mut output = String::new();

    let nickname = profile
        .and_then(|p| p.user.name.as_deref())
        .unwrap_or(site.owner);
    let avatar = profile
        .map(|p| p.user.avatar_url.clone())
        .unwrap_or_else(|| site.avatar_url());

    output.push_str(&format!("# {} (Level {})\n\n", nickname, site.level(year)));
    output.push_str(&format!("![avatar]({})\n\n", avatar));
    output.push_str(&format!("**{}** [{}]\n\n", site.display_name, site.flag));
    if let Some(bio) = profile.and_then(|p| p.user.bio.as_deref()) {
        output.push_str(&format!("> {}\n\n", bio));
    }
    output.push_str(&format!("*{}*\n\n", site.tagline));

    match profile {
        Some(profile) => {
            output.push_str("## Currently Online\n\n");
            output.push_str("| Metric | Value |\n|--------|-------|\n");
            output.push_str(&format!(
                "| Public Repositories | {} |\n",
                profile.user.public_repos
            ));
            output.push_str(&format!(
                "| Total Stars | {} |\n",
                profile.stats.total_stars
            ));
            output.push_str(&format!(
                "| Merge Commits | {} |\n",
                profile.stats.merge_commit_count
            ));
            output.push_str(&format!("| Following | {} |\n", profile.user.following));
            output.push_str(&format!("| Followers | {} |\n", profile.user.followers));
            if let Some(ref language) = profile.stats.dominant_language {
                output.push_str(&format!(
                    "| Top Language | {} ({}) |\n",
                    language.name, language.percentage
                ));
            }
        }
        None => {
            output.push_str(&format!(
                "> GitHub data unavailable: {}\n",
                failure.unwrap_or("unknown error")
            ));
        }
    }

    output.push_str("\n## Badges\n\n");
    output.push_str(&format!(
        "- ![{}]({}) {} ({} XP)\n",
        site.badge_title, site.badge_icon, site.badge_title, site.badge_xp
    ));
    output.push_str(&format!(
        "- {} years of service\n",
        site.years_of_service(year)
    ));
    output.push_str(&format!(
        "- ![{}]({}) {}\n",
        badge.label, badge.icon, badge.label
    ));

    output.push_str("\n## About me\n\n");
    output.push_str(&format!("{}\n", site.about));

    output.push_str("\n## Technologies\n\n");
    output.push_str(&format!("{}\n", site.technologies.join(", ")));

    output.push_str("\n## Publications\n\n");
    for (title, url) in site.publications {
        output.push_str(&format!("- [{}]({})\n", title, url));
    }

    output.push_str("\n## Top Repositories\n\n");
    for (name, url) in site.top_repositories {
        output.push_str(&format!("- [{}]({})\n", name, url));
    }

    output.push_str("\n## Links\n\n");
    output.push_str(&format!("- [GitHub]({})\n", site.github_url()));
    output.push_str(&format!("- [LinkedIn]({})\n", site.linkedin_url));
    output.push_str(&format!("- [X]({})\n", site.twitter_url));

    if let Some(profile) = profile {
        output.push_str(&format!(
            "\n---\n*Fetched {}*\n",
            profile.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    output.push_str(&format!(
        "\n© {} - {} {}\n",
        site.copyright_since, year, site.owner
    ));

    output
}

fn format_json(
    profile: Option<&UserProfile>,
    badge: &BadgeDescriptor,
    failure: Option<&str>,
) -> anyhow::Result<String> {
    let card = serde_json::json!({
        "profile": profile,
        "badge": badge,
        "error": failure,
    });

    Ok(serde_json::to_string_pretty(&card)?)
}
