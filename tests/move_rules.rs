use descent::{
    Error,
    puzzle::{Configuration, Direction, MessagePolicy, PickupLedger, step, successors},
};

fn go(key: &str, width: usize, direction: Direction) -> Configuration {
    let config = Configuration::decode(key).unwrap();
    let mut ledger = PickupLedger::new(&[]);
    step(&config, width, direction, &MessagePolicy::default(), &mut ledger)
        .unwrap()
        .configuration
}

#[test]
fn walls_never_move_and_clear_the_message() {
    let next = go("0|hello|@#.", 3, Direction::Right);
    assert_eq!(next.field(), "@#.");
    assert_eq!(next.message, "");
    assert_eq!(next.level, 0);
}

#[test]
fn off_board_behaves_like_a_wall() {
    let next = go("0|hello|@..", 3, Direction::Left);
    assert_eq!(next.encode(), "0||@..");

    // single row: up and down leave the board
    assert_eq!(go("0||.@.", 3, Direction::Up).field(), ".@.");
    assert_eq!(go("0||.@.", 3, Direction::Down).field(), ".@.");
}

#[test]
fn boulders_are_blocked_by_boulders_walls_stairs_and_gold() {
    for field in ["@00.", "@0#.", "@0>.", "@0$."] {
        let next = go(&format!("0|x|{field}"), 4, Direction::Right);
        assert_eq!(next.field(), field, "boulder moved in {field}");
        assert_eq!(next.message, "");
    }
}

#[test]
fn boulder_against_the_edge_stays() {
    assert_eq!(go("0||.@0", 3, Direction::Right).field(), ".@0");
}

#[test]
fn boulder_is_pushed_onto_floor() {
    assert_eq!(go("0||@0.", 3, Direction::Right).field(), ".@0");
}

#[test]
fn boulder_fills_pit_then_floor_is_walkable() {
    let policy = MessagePolicy::default();
    let mut ledger = PickupLedger::new(&[]);

    let start = Configuration::decode("0||@0^").unwrap();
    let filled = step(&start, 3, Direction::Right, &policy, &mut ledger).unwrap();
    assert_eq!(filled.configuration.field(), ".@.");
    assert_eq!(filled.configuration.message, policy.pit_filled);
    assert!(!filled.advanced);

    let walked = step(&filled.configuration, 3, Direction::Right, &policy, &mut ledger).unwrap();
    assert_eq!(walked.configuration.field(), "..@");
    assert_eq!(walked.configuration.message, "");
}

#[test]
fn pit_filled_message_follows_the_hint_threshold() {
    let policy = MessagePolicy::default();
    assert_eq!(
        go("5||@0^", 3, Direction::Right).encode(),
        format!("5|{}|.@.", policy.pit_filled)
    );
    assert_eq!(go("6||@0^", 3, Direction::Right).encode(), "6||.@.");
    assert_eq!(go("7|x|@0^", 3, Direction::Right).encode(), "7||.@.");
}

#[test]
fn vertical_push_uses_row_width() {
    // 2 wide, 3 tall: player above boulder above pit
    let next = go("0||@.0.^.", 2, Direction::Down);
    assert_eq!(next.field(), "..@...");
}

#[test]
fn pit_blocks_with_warning_below_the_threshold_only() {
    let policy = MessagePolicy::default();
    assert_eq!(go("0||@^", 2, Direction::Right).message, policy.pit_warning);
    assert_eq!(go("5||@^", 2, Direction::Right).message, policy.pit_warning);
    assert_eq!(go("6||@^", 2, Direction::Right).message, "");
    assert_eq!(go("6||@^", 2, Direction::Right).field(), "@^");
}

#[test]
fn stairs_advance_the_level() {
    let policy = MessagePolicy::default();
    let mut ledger = PickupLedger::new(&[]);
    let config = Configuration::decode("2|intro|@>").unwrap();

    let next = step(&config, 2, Direction::Right, &policy, &mut ledger).unwrap();
    assert!(next.advanced);
    assert_eq!(next.configuration.level, 3);
    assert_eq!(next.configuration.field(), ".@");
    assert_eq!(next.configuration.message, policy.descend);
}

#[test]
fn collectibles_consume_pickup_messages_in_order() {
    let messages = vec!["first".to_string(), "second".to_string()];
    let mut ledger = PickupLedger::new(&messages);
    let policy = MessagePolicy::default();

    let config = Configuration::decode("0||@$$").unwrap();
    let one = step(&config, 3, Direction::Right, &policy, &mut ledger).unwrap();
    assert_eq!(one.configuration.encode(), "0|first|.@$");
    let two = step(&one.configuration, 3, Direction::Right, &policy, &mut ledger).unwrap();
    assert_eq!(two.configuration.encode(), "0|second|..@");
    assert_eq!(ledger.consumed(), 2);
    assert_eq!(ledger.remaining(), 0);

    let err = step(&config, 3, Direction::Right, &policy, &mut ledger).unwrap_err();
    assert!(matches!(err, Error::PickupMessagesExhausted { consumed: 2, .. }));
}

#[test]
fn field_without_player_is_an_error() {
    let config = Configuration::decode("0||...").unwrap();
    let mut ledger = PickupLedger::new(&[]);
    let err = step(
        &config,
        3,
        Direction::Left,
        &MessagePolicy::default(),
        &mut ledger,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingPlayer { .. }));
}

#[test]
fn successors_follow_edge_order() {
    let config = Configuration::decode("0|hi|#.#.@.#.#").unwrap();
    let mut ledger = PickupLedger::new(&[]);
    let steps = successors(&config, 3, &MessagePolicy::default(), &mut ledger).unwrap();
    let fields: Vec<String> = steps.iter().map(|s| s.configuration.field()).collect();
    assert_eq!(
        fields,
        vec!["#.#@..#.#", "#.#...#@#", "#@#...#.#", "#.#..@#.#"]
    );
}
