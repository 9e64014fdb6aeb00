use simon_core::sim::{ScriptedRng, SimEvent, Trace, VirtualClock, VirtualPanel, VirtualPort};
use simon_core::{
    BindError, Direction, Game, GameConfig, LedMask, Level, PinMap, SEQUENCE_LENGTH, Symbol,
    Timings, Verdict, boot,
};

const ALTERNATING: [u8; 10] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2];

fn started_game() -> (Game<VirtualPanel, ScriptedRng, VirtualClock>, Trace) {
    let trace = Trace::default();
    // 0 -> 1, 1 -> 2
    let mut game = Game::new(
        VirtualPanel::new(trace.clone()),
        ScriptedRng::new(&[0, 1]),
        VirtualClock::new(trace.clone()),
        GameConfig::DEFAULT,
    );
    game.start();
    trace.take();
    (game, trace)
}

/// Holds `button` for one poll, then lets go.
fn tap(game: &mut Game<VirtualPanel, ScriptedRng, VirtualClock>, button: Symbol) -> Option<Verdict> {
    game.engine_mut().io_mut().press(button);
    let verdict = game.poll();
    game.engine_mut().io_mut().release(button);
    verdict
}

fn playbacks(events: &[SimEvent]) -> usize {
    let on_gap_pattern = events
        .windows(3)
        .filter(|w| matches!(w, [SimEvent::Led(_, Level::Off), SimEvent::Sleep(500), SimEvent::Sleep(500)]))
        .count();
    on_gap_pattern / SEQUENCE_LENGTH
}

#[test]
fn scripted_rng_yields_the_alternating_sequence() {
    let (game, _) = started_game();
    let values: Vec<u8> = game.engine().sequence().iter().map(Symbol::value).collect();
    assert_eq!(values, ALTERNATING);
}

#[test]
fn ten_correct_presses_win_exactly_once() {
    let (mut game, trace) = started_game();
    let rng_calls = game.engine().rng().calls();

    let mut verdicts = Vec::new();
    for value in ALTERNATING {
        verdicts.push(tap(&mut game, Symbol::from_value(value).unwrap()).unwrap());
    }

    let wins = verdicts.iter().filter(|v| **v == Verdict::Won).count();
    assert_eq!(wins, 1);
    assert_eq!(verdicts.last(), Some(&Verdict::Won));
    for (i, v) in verdicts[..9].iter().enumerate() {
        assert_eq!(*v, Verdict::Advanced { cursor: i + 1 });
    }

    assert_eq!(game.engine().cursor(), 0);
    assert_eq!(game.engine().generation(), 2);
    assert_eq!(game.engine().rng().calls() - rng_calls, SEQUENCE_LENGTH);
    assert_eq!(playbacks(&trace.take()), 1);
    assert_eq!(game.score().wins, 1);
    assert_eq!(game.score().losses, 0);
}

#[test]
fn wrong_first_press_loses_exactly_once() {
    let (mut game, trace) = started_game();
    let rng_calls = game.engine().rng().calls();

    let verdict = tap(&mut game, Symbol::Three);
    assert_eq!(verdict, Some(Verdict::Lost { pressed: Symbol::Three, expected: Symbol::One }));

    let events = trace.take();
    let all_on = events
        .windows(4)
        .filter(|w| w.iter().all(|e| matches!(e, SimEvent::Led(_, Level::On))))
        .count();
    assert_eq!(all_on, 1);
    assert!(events.contains(&SimEvent::Sleep(300)));
    assert_eq!(playbacks(&events), 1);
    assert_eq!(events.last(), Some(&SimEvent::Sleep(200)));

    assert_eq!(game.engine().cursor(), 0);
    assert_eq!(game.engine().generation(), 2);
    assert_eq!(game.engine().rng().calls() - rng_calls, SEQUENCE_LENGTH);
    assert_eq!(game.engine().io().lit(), LedMask::empty());
    assert_eq!(game.score().losses, 1);
}

#[test]
fn the_round_after_a_loss_starts_from_the_top() {
    let (mut game, _) = started_game();
    tap(&mut game, Symbol::One);
    tap(&mut game, Symbol::Two);
    assert_eq!(game.engine().cursor(), 2);

    tap(&mut game, Symbol::Four);
    assert_eq!(game.engine().cursor(), 0);
    assert_eq!(tap(&mut game, Symbol::One), Some(Verdict::Advanced { cursor: 1 }));
}

#[test]
fn buttons_one_and_three_together_count_as_one() {
    let (mut game, _) = started_game();
    let panel = game.engine_mut().io_mut();
    panel.press(Symbol::One);
    panel.press(Symbol::Three);
    assert_eq!(game.engine_mut().sample_input(), Some(Symbol::One));
    assert_eq!(game.poll(), Some(Verdict::Advanced { cursor: 1 }));
}

#[test]
fn nothing_pressed_never_moves_the_game() {
    let (mut game, trace) = started_game();
    let before = game.engine().sequence().clone();
    for _ in 0..1_000 {
        assert_eq!(game.engine_mut().sample_input(), None);
        assert_eq!(game.poll(), None);
    }
    assert_eq!(game.engine().cursor(), 0);
    assert_eq!(game.engine().sequence(), &before);
    assert!(trace.is_empty());
}

#[test]
fn boot_binds_then_plays_the_first_sequence() {
    let trace = Trace::default();
    let game = boot(
        "GPIO_0",
        Some(VirtualPort::new()),
        PinMap::NRF52_DK,
        ScriptedRng::new(&[0, 1]),
        VirtualClock::new(trace.clone()),
        GameConfig::DEFAULT,
    )
    .unwrap();

    let expected = Timings::DEFAULT.playback_ms() as u64 + Timings::DEFAULT.start_pause_ms as u64;
    assert_eq!(game.engine().clock().elapsed_ms(), expected);

    // every led is back off (pin high) after playback
    let port = game.engine().io().port();
    assert!(PinMap::NRF52_DK.leds.iter().all(|pin| port.level(*pin)));
}

#[test]
fn boot_without_a_device_runs_no_game_logic() {
    let trace = Trace::default();
    let rng = ScriptedRng::new(&[0, 1]);
    let result = boot::<VirtualPort, _, _>(
        "GPIO_0",
        None,
        PinMap::NRF52_DK,
        rng,
        VirtualClock::new(trace.clone()),
        GameConfig::DEFAULT,
    );

    assert_eq!(result.err(), Some(BindError::DeviceMissing("GPIO_0")));
    assert!(trace.is_empty());
}

#[test]
fn boot_with_a_broken_pin_fails() {
    let mut port = VirtualPort::new();
    port.reject(11);
    let result = boot(
        "GPIO_0",
        Some(port),
        PinMap::NRF52_DK,
        ScriptedRng::new(&[0]),
        VirtualClock::new(Trace::default()),
        GameConfig::DEFAULT,
    );
    assert_eq!(
        result.err(),
        Some(BindError::PinConfig { pin: 11, direction: Direction::Input })
    );
    assert_eq!(
        BindError::PinConfig { pin: 11, direction: Direction::Input }.to_string(),
        "failed to configure pin 11 as input"
    );
}
