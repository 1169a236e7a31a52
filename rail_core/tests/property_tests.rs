use proptest::prelude::*;
use rail_core::calculations::distance::{distance, Coordinate};
use rail_core::calculations::recipe::RecipeCalculator;
use rail_core::materials::{minimum_craft, Material};
use rail_core::units::Blocks;

fn material() -> impl Strategy<Value = Material> {
    prop_oneof![
        Just(Material::IronIngot),
        Just(Material::GoldIngot),
        Just(Material::Stick),
        Just(Material::Redstone),
    ]
}

proptest! {
    /// Property: distance does not depend on direction of travel
    #[test]
    fn distance_is_symmetric(ax in any::<i32>(), az in any::<i32>(), bx in any::<i32>(), bz in any::<i32>()) {
        let a = Coordinate::new(ax, az);
        let b = Coordinate::new(bx, bz);
        prop_assert_eq!(distance(a, b), distance(b, a));
    }

    /// Property: a point is zero blocks from itself
    #[test]
    fn distance_to_self_is_zero(x in any::<i32>(), z in any::<i32>()) {
        let p = Coordinate::new(x, z);
        prop_assert_eq!(distance(p, p), Blocks(0));
    }

    /// Property: formatted coordinates parse back to the same value
    #[test]
    fn coordinate_text_round_trips(x in any::<i32>(), z in any::<i32>()) {
        let text = format!("{} {}", x, z);
        prop_assert_eq!(text.parse::<Coordinate>().unwrap(), Coordinate::new(x, z));
    }

    /// Property: minimum craft never reduces an amount and is idempotent
    #[test]
    fn minimum_craft_is_idempotent(m in material(), amount in any::<u64>()) {
        match minimum_craft(m, amount) {
            Ok(once) => {
                prop_assert!(once >= amount);
                prop_assert_eq!(minimum_craft(m, once).unwrap(), once);
                prop_assert_eq!(once % m.batch_threshold(), 0);
                prop_assert!(once - amount < m.batch_threshold());
            }
            Err(err) => {
                // Only fails when the next multiple does not fit in a u64
                let next = u128::from(amount).next_multiple_of(u128::from(m.batch_threshold()));
                prop_assert!(next > u128::from(u64::MAX));
                prop_assert_eq!(err.error_code(), "QUANTITY_OVERFLOW");
            }
        }
    }

    /// Property: powered and normal rails together cover every block
    #[test]
    fn rails_cover_every_block(blocks in any::<u64>()) {
        let report = RecipeCalculator::new(Blocks(blocks)).compute().unwrap();
        prop_assert_eq!(report.powered_rails.rails + report.normal_rails.rails, blocks);
    }

    /// Property: one torch per powered rail
    #[test]
    fn torches_match_powered_rails(blocks in 0u64..100_000_000) {
        let report = RecipeCalculator::new(Blocks(blocks)).compute().unwrap();
        prop_assert_eq!(report.redstone_torches.torches, report.powered_rails.rails);
        prop_assert_eq!(report.redstone_torches.sticks, report.powered_rails.rails);
        prop_assert_eq!(report.redstone_torches.redstone, report.powered_rails.rails);
    }

    /// Property: ingot quantities are always whole batches
    #[test]
    fn ingots_are_whole_batches(blocks in 0u64..100_000_000) {
        let report = RecipeCalculator::new(Blocks(blocks)).compute().unwrap();
        prop_assert_eq!(report.normal_rails.iron_ingots % 6, 0);
        prop_assert_eq!(report.powered_rails.gold_ingots % 6, 0);
        prop_assert_eq!(report.totals.iron_ingots, report.normal_rails.iron_ingots);
        prop_assert_eq!(report.totals.gold_ingots, report.powered_rails.gold_ingots);
    }

    /// Property: more track never needs fewer materials
    #[test]
    fn materials_are_monotonic(blocks in 0u64..10_000_000, extra in 0u64..10_000) {
        let short = RecipeCalculator::new(Blocks(blocks)).compute().unwrap().totals;
        let long = RecipeCalculator::new(Blocks(blocks + extra)).compute().unwrap().totals;
        prop_assert!(long.powered_rails >= short.powered_rails);
        prop_assert!(long.gold_ingots >= short.gold_ingots);
        prop_assert!(long.redstone >= short.redstone);
    }
}
