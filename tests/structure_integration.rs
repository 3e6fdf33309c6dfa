//! Integration tests for the tournament structure engine.
//!
//! These tests walk through the documented scenarios: frozen clock, breaks,
//! prize table rejection, average stack guards, and override atomicity.

#[cfg(test)]
mod structure_tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tourney_engine::structure::{
        BlindLevel, EntryRange, PositionRange, PrizeItem, PrizeLevel, PrizeStructure,
        PrizeValidationError, SessionOverride, TournamentBasic, TournamentSettings, clock,
        metrics::{self, StackMetricsInput},
        overrides, validate_prize_structures,
    };

    fn timer_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 18, 30, 0).unwrap()
    }

    fn level(number: u32, small_blind: i64, big_blind: i64, minutes: u32) -> BlindLevel {
        BlindLevel::new(number, small_blind, big_blind, minutes)
    }

    #[test]
    fn test_single_level_past_end_freezes() {
        let levels = vec![level(1, 100, 200, 20)];
        let now = timer_start() + Duration::minutes(25);

        let info = clock::current_level_info(&levels, timer_start(), now).unwrap();

        assert_eq!(info.current_index, 0);
        assert_eq!(info.remaining_seconds, 0);
        assert!(info.next_level.is_none());
        assert!(!info.is_break);
        assert_eq!(info.display_level, Some(1));
        assert!(info.is_finished());
        assert_eq!(clock::current_big_blind(&levels, timer_start(), now), Some(200));
    }

    #[test]
    fn test_inside_break() {
        let l1 = level(1, 100, 200, 20);
        let l2 = level(2, 200, 400, 20);
        let levels = vec![l1, BlindLevel::break_for(10), l2.clone()];
        let now = timer_start() + Duration::minutes(22);

        let info = clock::current_level_info(&levels, timer_start(), now).unwrap();

        assert_eq!(info.current_index, 1);
        assert!(info.current_level.is_break);
        assert_eq!(info.remaining_seconds, 480);
        assert!(info.is_break);
        assert_eq!(info.display_level, None);
        assert_eq!(info.next_level, Some(l2));
        assert_eq!(clock::current_big_blind(&levels, timer_start(), now), Some(200));
        assert_eq!(clock::display_level_at(&levels, info.current_index + 1), Some(2));
    }

    #[test]
    fn test_percentage_total_rejected() {
        let structures = vec![PrizeStructure::new(
            1,
            Some(9),
            vec![PrizeLevel::new(1, 1, vec![PrizeItem::percentage(60.0)])],
        )];

        let err = validate_prize_structures(&structures).unwrap_err();

        assert_eq!(
            err,
            PrizeValidationError::PercentageTotal {
                entries: EntryRange::new(1, Some(9)),
                positions: PositionRange::new(1, 1),
                total: 60.0,
            }
        );
        let message = err.to_string();
        assert!(message.contains("1-9"), "message was: {}", message);
        assert!(message.contains("1-1"), "message was: {}", message);
    }

    #[test]
    fn test_entry_range_overlap_rejected() {
        let structures = vec![
            PrizeStructure::new(1, Some(9), vec![]),
            PrizeStructure::new(5, Some(20), vec![]),
        ];

        let err = validate_prize_structures(&structures).unwrap_err();

        assert_eq!(
            err,
            PrizeValidationError::EntryRangeOverlap {
                first: EntryRange::new(1, Some(9)),
                second: EntryRange::new(5, Some(20)),
            }
        );
        assert_eq!(err.to_string(), "Entry ranges overlap: 1-9 and 5-20");
    }

    #[test]
    fn test_standard_prize_table_is_valid() {
        let settings = TournamentSettings::standard("Daily", 100);
        assert!(validate_prize_structures(&settings.prize_structures).is_ok());

        let turbo = TournamentSettings::turbo("Daily Turbo", 100);
        assert!(validate_prize_structures(&turbo.prize_structures).is_ok());
    }

    #[test]
    fn test_average_stack_guard() {
        let mut input = StackMetricsInput {
            blind_levels: &[],
            timer_started_at: None,
            current_stack: 0,
            buy_in: 10_000,
            entries: Some(100),
            remaining: Some(40),
            starting_stack: Some(20_000),
        };
        let stack = metrics::calculate(&input, timer_start());
        assert_eq!(stack.average_stack, Some(50_000));

        input.remaining = Some(0);
        let stack = metrics::calculate(&input, timer_start());
        assert_eq!(stack.average_stack, None);
        assert_eq!(stack.average_in_bb, None);
    }

    #[test]
    fn test_override_replaces_whole_group() {
        let store = TournamentSettings {
            basic: TournamentBasic::new(10_000).with_name("A"),
            blind_levels: vec![level(1, 100, 200, 20)],
            prize_structures: vec![],
        };
        let mut session_override = SessionOverride::none();
        session_override.customize_basic(TournamentBasic {
            name: None,
            buy_in: 15_000,
            rake: None,
            starting_stack: None,
            notes: None,
        });

        let effective = overrides::resolve(&store, &session_override);

        assert_eq!(effective.basic.name, None);
        assert_eq!(effective.basic.buy_in, 15_000);
        assert_eq!(effective.basic, TournamentBasic::new(15_000));
        assert!(effective.has_basic_override);
        assert!(!effective.has_blinds_override);
        assert!(!effective.has_prizes_override);
        assert_eq!(effective.blind_levels, store.blind_levels);
    }

    #[test]
    fn test_override_document_round_trip() {
        let json = r#"{
            "basic": {"name": null, "buyIn": 15000, "rake": null, "startingStack": null, "notes": null},
            "blindLevels": null
        }"#;
        let parsed = SessionOverride::from_json(json).unwrap();
        assert!(parsed.basic.is_present());
        assert!(!parsed.blind_levels.is_present());
        assert!(!parsed.prize_structures.is_present());
    }

    #[test]
    fn test_settings_document_loads() {
        let json = r#"{
            "basic": {"name": "Main", "buyIn": 20000, "rake": 2000, "startingStack": 30000, "notes": null},
            "blindLevels": [
                {"level": 1, "isBreak": false, "smallBlind": 100, "bigBlind": 200, "ante": null, "durationMinutes": 20},
                {"level": 0, "isBreak": true, "smallBlind": null, "bigBlind": null, "ante": null, "durationMinutes": 10}
            ],
            "prizeStructures": [
                {"minEntrants": 1, "maxEntrants": null, "sortOrder": 0, "prizeLevels": [
                    {"minPosition": 1, "maxPosition": 1, "sortOrder": 0, "prizeItems": [
                        {"prizeType": "percentage", "percentage": 100, "sortOrder": 0},
                        {"prizeType": "fixedAmount", "amount": 5000, "sortOrder": 1}
                    ]}
                ]}
            ]
        }"#;

        let settings = TournamentSettings::from_json(json).unwrap();
        assert_eq!(settings.basic.rake, Some(2000));
        assert!(settings.blind_levels[1].is_break);
        assert!(validate_prize_structures(&settings.prize_structures).is_ok());
    }
}
