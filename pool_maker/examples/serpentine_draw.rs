//! Serpentine Draw Example
//!
//! Demonstrates how a ranked field is classified, allocated and dealt into
//! pools under club quotas.

use pool_maker::pool::{DrawConfig, PoolMaker, SerpentineCursor, SizePair, classify};
use pool_maker::roster::RosterReader;

const ROSTER: &str = "\
Okafor, Ada, Riverside, A18
Lindqvist, Bo, Riverside, A20
Moreau, Claire, Harbor, B17
Tanaka, Daichi, , B19
Silva, Eva, Riverside, B21
Novak, Filip, Harbor, C18
Haddad, Gia, Summit, C20
Kowalski, Hana, Riverside, C22
Brennan, Ian, Summit, D19
Ruiz, Jade, Harbor, E20
Petrov, Kai, Riverside, U
Achebe, Lena, , U
Fischer, Milo, Summit, U
";

fn main() {
    println!("=== Pool Draw Example ===\n");

    // Example 1: Size classification
    println!("Example 1: Choosing pool sizes");
    let candidates = [SizePair::new(6, 7), SizePair::new(7, 8), SizePair::new(5, 6)];
    for count in [13, 15, 10, 4] {
        match classify(count, &candidates) {
            Ok(pair) => println!("  {count:>2} competitors -> pools of {pair}"),
            Err(e) => println!("  {count:>2} competitors -> {e}"),
        }
    }

    // Example 2: Serpentine order
    println!("\nExample 2: Serpentine order over 3 pools");
    let order: Vec<String> = SerpentineCursor::new(3)
        .take(9)
        .map(|i| (i + 1).to_string())
        .collect();
    println!("  {}", order.join(" "));

    // Example 3: Full draw
    println!("\nExample 3: Drawing {} entries", ROSTER.lines().count());
    let maker = PoolMaker::new(DrawConfig::default()).expect("default config is valid");
    let roster = RosterReader::default()
        .read(ROSTER.as_bytes())
        .expect("roster is valid CSV");
    let draw = maker.draw(&roster).expect("13 competitors fit 6:7");

    for (club, quota) in draw.quotas.iter() {
        println!("  quota {club}: {quota} per pool");
    }
    for pool in &draw.pools {
        println!("\n  Pool #{} ({}/{})", pool.id(), pool.len(), pool.capacity());
        for c in pool.members() {
            println!("    {:<8} {:<10} {:<10} {}", c.first, c.last, c.club, c.rating());
        }
    }

    if draw.is_complete() {
        println!("\nEverybody was placed.");
    } else {
        println!("\n{} competitors could not be placed.", draw.overflow_count());
    }
}
