use descent::{
    graph::{ExploreConfig, explore},
    puzzle::Campaign,
};

#[test]
fn builtin_campaign_explores_completely() {
    let campaign = Campaign::builtin().unwrap();
    let graph = explore(&campaign, &ExploreConfig::default()).unwrap();

    assert_eq!(graph.len(), 9440);
    assert_eq!(graph.pickups_consumed(), campaign.collectible_count());
    assert!(graph.victory_count() > 0);

    let start = graph.start().unwrap();
    assert_eq!(start.level, 0);
    assert_eq!(Some(start.message.as_str()), campaign.intro_message(0));

    // the final level's victory sinks are terminal
    let last = campaign.level_count();
    assert!(
        graph
            .iter()
            .filter(|s| s.victory && s.level == last)
            .all(|s| s.is_terminal())
    );
}

#[test]
fn pickup_messages_follow_level_order() {
    let campaign = Campaign::builtin().unwrap();
    let graph = explore(&campaign, &ExploreConfig::default()).unwrap();

    let pickups = campaign.pickup_messages();
    let mut first_seen = Vec::new();
    for state in &graph {
        let Some(index) = pickups.iter().position(|m| *m == state.message) else {
            continue;
        };
        if !first_seen.contains(&index) {
            first_seen.push(index);
        }
    }
    assert_eq!(first_seen, (0..pickups.len()).collect::<Vec<_>>());
}
