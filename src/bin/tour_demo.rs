// Walks through the model: builds a small catalog, collects feedback, books and prints summaries.
// Set RUST_LOG=debug to see entities being created and released.

use anyhow::Result;
use tourism_model::{
    Attraction, BookingManager, BookingStatus, Catalog, Price, SpecialEvent, TourEntity,
    TourPackage, UserProfile,
};

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    setup_tracing();

    let mut catalog = Catalog::new();
    let canyon = catalog.insert(Attraction::new(
        "Grand Canyon",
        "A stunning natural wonder.",
        "Arizona, USA",
        "6 AM - 6 PM",
    )?);
    let festival = catalog.insert(SpecialEvent::new(
        Attraction::new(
            "Lantern Festival",
            "Evening lantern parade along the river.",
            "Old Town",
            "7 PM - 11 PM",
        )?,
        "2025-06-01",
        "2025-06-03",
    )?);

    let mut package = TourPackage::new("Southwest Explorer", Price::new(499.99, "USD"))?;
    package.add_attraction(Attraction::new(
        "Hoover Dam",
        "Art deco dam on the Colorado River.",
        "Nevada, USA",
        "9 AM - 5 PM",
    )?)?;
    package.add_attraction(Attraction::new(
        "Antelope Canyon",
        "Slot canyon with light beams.",
        "Arizona, USA",
        "8 AM - 4 PM",
    )?)?;
    package.rate_attraction("Hoover Dam", 4)?;
    let explorer = catalog.insert(package);
    catalog.rate_member(explorer, "Antelope Canyon", 5)?;

    let alice = UserProfile::new("Alice Johnson", "alice@example.com")?;
    let bob = UserProfile::new("Bob Smith", "bob@example.com")?;
    for rating in [5, 4, 5] {
        catalog.rate(canyon, rating)?;
    }
    alice.leave_feedback(&mut catalog, festival, 5, "Magical evening")?;
    bob.leave_feedback(&mut catalog, festival, 3, "Too crowded")?;

    println!("=== Catalog ===");
    for (_, entity) in catalog.iter() {
        println!("{}\n", TourEntity::display_info(entity));
    }

    println!("=== User Profiles ===");
    println!("{}", alice.display_profile());
    println!("{}\n", bob.display_profile());

    let manager = BookingManager::default();
    let mut first = manager.book(&catalog, alice.name(), canyon, "2025-06-10", None)?;
    first.confirm();
    let second = manager.book(
        &catalog,
        bob.name(),
        explorer,
        "2025-07-01",
        Some(BookingStatus::Pending),
    )?;

    println!("=== Bookings ===");
    for booking in [&first, &second] {
        println!("{}\n", booking.display_info(&catalog)?);
    }
    println!("{}", manager.summary());

    println!("\n=== Export ===");
    println!("{}", catalog.to_json()?);

    Ok(())
}
