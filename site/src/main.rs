//! Demo binary driving the documentation page widgets headlessly.
//!
//! Walks through the same interactions the page supports: a debounced
//! search, month navigation with a date selection, and a booking with the
//! simulated confirmation.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_booking::{BookingAction, TicketCategory};
use vitrine_calendar::CalendarAction;
use vitrine_catalog::SearchAction;
use vitrine_core::environment::SystemClock;
use vitrine_site::{Site, design_system_manifest};
use vitrine_surface::{InMemorySurface, TracingNotifier};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_site=info,vitrine_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let surface = Arc::new(InMemorySurface::default());
    let site = Site::new(
        design_system_manifest(),
        surface,
        Arc::new(TracingNotifier),
        Arc::new(SystemClock),
    );

    println!("=== Vitrine: documentation page interactions ===\n");
    println!("Index entries: {}", site.index().len());

    // Debounced search: type, wait out the quiet period, read the result.
    println!("\n>>> Search: \"color\"");
    if let Ok(handle) = site
        .search()
        .send(SearchAction::InputChanged {
            text: "color".into(),
        })
        .await
    {
        handle.wait().await;
    }
    let matches = site.search().state(|s| s.last_match_count).await;
    println!("Matches: {matches:?}");

    println!("\n>>> Search: Escape (reset)");
    let _ = site.search().send(SearchAction::EscapePressed).await;

    // Calendar: navigate forward one month, then pick a day.
    if let Some(calendar) = site.calendar() {
        let _ = calendar.send(CalendarAction::NextMonth).await;
        let title = calendar.state(vitrine_calendar::CalendarState::title).await;
        println!("\n>>> Calendar showing: {title}");

        // Mid-month of the displayed (next) month is always selectable.
        let (year, month0) = calendar.state(|s| (s.year, s.month0)).await;
        if let Some(date) = chrono::NaiveDate::from_ymd_opt(year, month0 + 1, 15) {
            let _ = calendar.send(CalendarAction::SelectDay { date }).await;
            let selected = calendar.state(|s| s.selected).await;
            println!("Selected: {selected:?}");
        }
    }

    // Booking: two adults and a child, then confirm and wait it out.
    if let Some(booking) = site.booking() {
        for _ in 0..2 {
            let _ = booking
                .send(BookingAction::Adjust {
                    category: TicketCategory::Adults,
                    delta: 1,
                })
                .await;
        }
        let _ = booking
            .send(BookingAction::Adjust {
                category: TicketCategory::Child,
                delta: 1,
            })
            .await;

        let summary = booking.state(|s| s.ledger.summary()).await;
        println!("\n>>> Booking: {} tickets, {}", summary.total_count, summary.total_cost);
        for line in &summary.lines {
            println!("    {}", line.label());
        }

        println!(">>> Confirming...");
        let resolved = booking
            .send_and_wait_for(
                BookingAction::ConfirmRequested,
                |a| matches!(a, BookingAction::ConfirmResolved),
                Duration::from_secs(5),
            )
            .await;
        match resolved {
            Ok(_) => println!("Booking resolved."),
            Err(err) => println!("Booking did not resolve: {err}"),
        }
    }

    println!("\n=== Done ===");
}
