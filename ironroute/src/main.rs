//! Plans a route through a sample building and prints it.

use ironroute_lib::{Agent, Enemy, GameNetwork, Item, MedKit, Room};

fn sample_building() -> Result<GameNetwork, Box<dyn std::error::Error>> {
    let mut building = GameNetwork::new();
    building.add_room(Room::entry("Loading Dock"))?;
    building.add_room(Room::entry("Lobby").with_enemy(Enemy::new("receptionist", 12)))?;
    building.add_room(Room::new("Corridor"))?;
    building.add_room(Room::new("Security").with_enemy(Enemy::new("guard", 35)))?;
    building.add_room(Room::new("Storage").with_item(Item::kevlar("vest", 15)))?;
    building.add_room(Room::new("Server Room").as_target())?;
    for (a, b) in [
        ("Loading Dock", "Storage"),
        ("Loading Dock", "Corridor"),
        ("Lobby", "Corridor"),
        ("Corridor", "Security"),
        ("Security", "Server Room"),
        ("Storage", "Server Room"),
    ] {
        building.connect(a, b)?;
    }
    Ok(building)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let building = sample_building()?;
    let mut agent = Agent::new("Tomas", 10, 75, 2);
    agent
        .pick_up_medkit(MedKit {
            name: "field kit".into(),
            recovery: 20,
        })
        .map_err(|kit| format!("could not carry {}", kit.name))?;

    let cost = building.cost_model(&agent);
    println!("Cost of entering each room for {}:", agent.name);
    for room in building.rooms() {
        println!("  {:<12} {:>6.1}", room.name(), cost.room_cost(room));
    }

    let route = building.advisory_route(&agent)?;
    println!(
        "Advisory route (cost {:.1}): {}",
        route.cost,
        route.rooms.join(" -> ")
    );

    let target = building.target_room()?.name().to_string();
    if let Some(entry) = route.entry() {
        let hop = building.next_hop(entry, &target, &agent)?;
        println!("First move from {entry}: {hop}");
    }
    Ok(())
}
