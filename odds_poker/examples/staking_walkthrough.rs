//! Staking Walkthrough Example
//!
//! Plays a handful of hands through both betting rounds with each preset.

use odds_poker::{StakingConfig, StakingEngine, classify, parse_hand};

fn main() {
    println!("=== Pot-Odds Staking Walkthrough ===\n");

    let hands = [
        "10s Js Qs Ks As", // Royal flush
        "2c 2d 5h 9s Kd",  // One pair
        "7h 2c",           // Unconnected, unsuited
        "As Kd",           // Ace-king, connected so a straight
        "5c 6d 7h 8s Kc",  // Open-ended straight draw
    ];
    let highest_bet = 60;

    for (name, config) in [
        ("standard", StakingConfig::standard()),
        ("capped", StakingConfig::capped()),
    ] {
        println!("Preset: {name} (seed pot {}, cap {})", config.seed_pot, config.upper_bound());

        for text in hands {
            let cards = match parse_hand(text) {
                Ok(cards) => cards,
                Err(e) => {
                    println!("  skipping {text:?}: {e}");
                    continue;
                }
            };

            let mut engine = match StakingEngine::with_config(config.clone()) {
                Ok(engine) => engine,
                Err(e) => {
                    println!("  bad config: {e}");
                    return;
                }
            };

            let category = classify(&cards).to_string();
            let first = engine.first_bet(&cards);
            let keep_going = engine.second_bet(highest_bet);

            println!(
                "  {text:<16} {category:<28} first bet {first:>4}  continue vs {highest_bet}: {keep_going:?}"
            );
        }
        println!();
    }
}
