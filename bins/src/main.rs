use dotenv::dotenv;
use eyre::Context;
use ledger::{
    announcements::AnnouncementQuery,
    reminders::{LogSink, MemorySink, NotificationSink},
    schedule::ScheduleView,
    Ledger,
};
use log::info;
use model::settings::Settings;
use storage::Storage;
use viewer::{
    feed::{render_dashboard, render_feed},
    profile::render_profile,
    schedule::render_schedule,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    let env = env::Env::load().context("Failed to load configuration")?;
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", env.rust_log());
    }
    pretty_env_logger::init();
    color_eyre::install()?;

    info!("creating ledger");
    let ledger = Ledger::new(Storage::mock());
    let settings = Settings::default();

    let dashboard = ledger.dashboard().await.context("Failed to load dashboard")?;
    println!("{}", render_dashboard(&dashboard));

    info!("loading {:?} for {}", env.window(), env.today());
    let mut view = ScheduleView::new(env.window(), env.today());
    view.set_selection(env.selection().clone());
    let model = view.reload(&ledger).await;
    println!("{}", render_schedule(&model));

    let personal = view
        .sessions()
        .iter()
        .find(|s| s.is_personal && !s.is_cancelled())
        .map(|s| s.id.clone());
    if let Some(id) = personal {
        let muted = MemorySink::default();
        let sink: &dyn NotificationSink = if settings.reminders_enabled() {
            &LogSink
        } else {
            &muted
        };
        let enabled = view.toggle_reminder(&id, sink);
        info!("reminder for session {} is {}", id, if enabled { "on" } else { "off" });
        println!("{}", render_schedule(&view.compose()));
    }

    let feed = ledger
        .announcement_feed(&AnnouncementQuery::default())
        .await
        .context("Failed to load announcements")?;
    println!("{}", render_feed(&feed));

    let overview = ledger
        .profile_overview()
        .await
        .context("Failed to load profile")?;
    println!("{}", render_profile(&overview));

    Ok(())
}
