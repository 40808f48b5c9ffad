//! Example build - a minimal demonstration of calc_core
//!
//! Assembles a small master item table, equips a caster build and
//! prints the aggregated bonuses, autocast registrations and summary
//! metrics.

use calc_core::prelude::*;

fn master_items() -> ItemTable {
    ItemTable::from_items([
        Item::new(100, "Crimson Staff [2]", ItemType::Weapon)
            .with_attack(60)
            .with_bonus("matk", "120")
            .with_bonus("matkPercent", "9===5"),
        Item::new(200, "Ultio-OS", ItemType::Armor)
            .with_defense(65)
            .with_bonus("matk", "40"),
        Item::new(201, "Manto Ultio-OS [1]", ItemType::Armor)
            .with_defense(30)
            .with_bonus("matk", "2---10")
            .with_bonus("matk", "EQUIP[Ultio-OS]===30")
            .with_bonus("m_my_element_neutral", "4---3")
            .with_bonus("matkPercent", "9===10"),
        Item::new(300, "Pedra Flutuante Mágica", ItemType::Armor)
            .with_bonus("vct", "5")
            .with_bonus("m_my_element_fire", "SUM[int==12]---2"),
        Item::new(400, "Luva dos Espíritos Malignos [1]", ItemType::Armor)
            .with_bonus("sp", "200")
            .with_bonus("hp", "500")
            .with_bonus("autocast__Frost Nova", "10,1,onhit"),
    ])
}

fn main() {
    let jobs = default_jobs();
    let warlock = jobs.get("warlock").cloned().unwrap_or_else(Job::novice);

    let mut calc = Calculator::new();
    calc.set_master_items(master_items())
        .set_job(warlock)
        .set_character(175, BaseStats::new(1, 30, 80, 120, 90, 40))
        .set_monster(Monster::training_dummy());

    let build = Build::new()
        .with_item(EquipSlot::Weapon, 100)
        .with_refine(EquipSlot::Weapon, 11)
        .with_item(EquipSlot::Armor, 200)
        .with_refine(EquipSlot::Armor, 9)
        .with_item(EquipSlot::Garment, 201)
        .with_refine(EquipSlot::Garment, 10)
        .with_item(EquipSlot::HeadUpper, 300)
        .with_item(EquipSlot::AccLeft, 400);

    calc.load_build(&build).expect("master table is loaded");
    calc.prepare_bonuses().expect("master table is loaded");

    println!("=== Aggregated bonuses ===");
    for (key, value) in calc.total_bonus().iter() {
        println!("  {:<24} {:>8.1}", key, value);
    }

    if !calc.autocast_entries().is_empty() {
        println!("\n=== Autocast procs ===");
        for entry in calc.autocast_entries() {
            println!(
                "  {} Lv{} ({}% {})",
                entry.skill_name, entry.skill_level, entry.chance_percent, entry.trigger
            );
        }
    }

    if !calc.unparsed_scripts().is_empty() {
        println!("\n=== Unparsed script entries ===");
        for bad in calc.unparsed_scripts() {
            println!("  item {} key {}: {:?}", bad.item_id, bad.bonus_key, bad.raw);
        }
    }

    let summary = calc.summary();
    println!("\n=== Summary ===");
    println!("  ATK:  {:.0}", summary.atk);
    println!("  MATK: {:.0}", summary.matk);
    println!("  HP:   {:.0}   SP: {:.0}", summary.max_hp, summary.max_sp);
    println!("  Hit:  {:.0}   Flee: {:.0}   ASPD: {:.0}", summary.hit, summary.flee, summary.aspd);
    println!("  Expected hit vs Training Dummy: {:.0}", summary.expected_hit);
}
