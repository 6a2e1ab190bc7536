use anyhow::Result;
use async_trait::async_trait;
use crossbeam_channel::unbounded;
use nearbite::data::business::{BusinessLocation, CategoryTag, Coordinate};
use nearbite::prelude::*;

/// Console-backed map surface: prints what a rendering surface would draw
struct ConsoleSurface {
    center: LatLng,
}

impl MapSurface for ConsoleSurface {
    fn add_marker(&mut self, id: MarkerId, position: LatLng, title: &str, _icon: &str) {
        println!("   📍 {} -> {} at {:.4}, {:.4}", id, title, position.lat, position.lng);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        println!("   🧹 removed {}", id);
    }

    fn set_marker_icon(&mut self, id: MarkerId, icon: &str) {
        println!("   🎨 {} icon -> {}", id, icon);
    }

    fn open_popup(&mut self, id: MarkerId, content: &PopupContent) {
        println!(
            "   💬 popup on {}: {} | {} | {} ({}m)",
            id, content.name, content.categories, content.address, content.distance_m
        );
    }

    fn close_popup(&mut self) {
        println!("   💬 popup closed");
    }

    fn center(&self) -> LatLng {
        self.center
    }
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&mut self, message: &str) {
        println!("   ⚠️  {}", message);
    }

    fn error(&mut self, message: &str) {
        println!("   ❌ {}", message);
    }
}

struct ConsoleList;

impl ListPanel for ConsoleList {
    fn show_entries(&mut self, entries: &[ListEntry]) {
        for entry in entries {
            println!(
                "   {}. {} — {} — {} ({}m)",
                entry.index, entry.name, entry.categories, entry.address, entry.distance_m
            );
        }
    }

    fn show_empty(&mut self) {
        println!("   (search returned no results)");
    }

    fn clear(&mut self) {
        println!("   (list cleared)");
    }
}

/// In-memory stand-in for the remote search API
struct DemoProvider;

#[async_trait]
impl SearchProvider for DemoProvider {
    async fn search(
        &self,
        ticket: &SearchTicket,
    ) -> std::result::Result<Vec<Business>, SearchError> {
        let all = sample_businesses(ticket.center);
        Ok(all
            .into_iter()
            .filter(|b| {
                ticket.query.category == "restaurants"
                    || b.categories
                        .iter()
                        .any(|tag| tag.alias() == ticket.query.category)
            })
            .filter(|b| b.distance <= f64::from(ticket.query.radius))
            .collect())
    }
}

fn sample_businesses(center: LatLng) -> Vec<Business> {
    let seed = [
        ("Nook", "Italian", "italian", 49.2901, -123.1381, false),
        ("Sushi Hub", "Sushi Bars", "sushi", 49.2846, -123.1187, false),
        ("Slice Works", "Pizza", "pizza", 49.2910, -123.1330, false),
        ("Gone Burger", "Burgers", "burgers", 49.2860, -123.1300, true),
        ("Tavola", "Italian", "italian", 49.2889, -123.1420, false),
    ];

    seed.iter()
        .map(|(name, category, alias, lat, lng, closed)| {
            let position = LatLng::new(*lat, *lng);
            Business {
                id: name.to_lowercase().replace(' ', "-"),
                name: name.to_string(),
                location: BusinessLocation {
                    address: "1040 Denman St".to_string(),
                    city: "Vancouver".to_string(),
                    coordinate: Coordinate {
                        latitude: *lat,
                        longitude: *lng,
                    },
                },
                categories: vec![CategoryTag::new(*category, *alias)],
                rating: 4.0,
                review_count: 42,
                distance: center.distance_to(&position),
                is_closed: *closed,
                ..Business::default()
            }
        })
        .collect()
}

/// Example of driving the engine headlessly, without any UI framework
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("🍜 Nearbite Headless Search Example");
    println!("===================================");

    let west_end = LatLng::new(49.2851117, -123.1338859);
    let (tx, rx) = unbounded();

    let mut engine = MapEngineBuilder::new()
        .with_surface(Box::new(ConsoleSurface { center: west_end }))
        .with_notifier(Box::new(ConsoleNotifier))
        .with_list_panel(Box::new(ConsoleList))
        .with_provider(Box::new(DemoProvider))
        .build()?;

    // Construction fires the initial search with the catalog defaults.
    let mut criteria = SearchCriteria::new(CriteriaCatalog::default(), tx);

    println!("\n🔎 Initial search ({}):", criteria.sort_description());
    while let Ok(query) = rx.try_recv() {
        engine.search(query).await;
    }

    println!("\n🖱️  Interacting with the result markers:");
    let ids: Vec<MarkerId> = engine.markers().iter().map(|m| m.id()).collect();
    if ids.len() >= 2 {
        engine.handle_event(MarkerEvent::HoverEnter(ids[0]));
        engine.handle_event(MarkerEvent::Click(ids[0]));
        engine.handle_event(MarkerEvent::HoverEnter(ids[1])); // suppressed
        engine.handle_event(MarkerEvent::Click(ids[1]));
        engine.handle_event(MarkerEvent::PopupClosed);
    }

    println!("\n🍕 Narrowing the search to pizza within 1km:");
    criteria.set_category("pizza")?;
    criteria.set_radius(1000)?;
    while let Ok(query) = rx.try_recv() {
        engine.search(query).await;
    }

    println!("\n✅ Headless search example completed successfully!");
    Ok(())
}
