//! Tests for the farming advisory engine
//! Verifies tip selection, ordering and truncation for representative weather

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::advisory::catalog;
use shared::{generate_farming_tips, matched_rules, ForecastDay, Tip, TipType, WeatherObservation, MAX_TIPS};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn forecast_day(high: i32, low: i32, precipitation: i32) -> ForecastDay {
    ForecastDay {
        day: "Wednesday".to_string(),
        date: date(2024, 6, 19),
        high,
        low,
        condition: "scattered clouds".to_string(),
        icon: "03d".to_string(),
        precipitation,
        weather_code: 802,
        avg_humidity: 55,
        avg_wind_speed: 12,
    }
}

fn titles(tips: &[Tip]) -> Vec<&str> {
    tips.iter().map(|t| t.title.as_str()).collect()
}

// =============================================================================
// Representative scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn clear_sky_mild_day() {
        let observation = WeatherObservation::new(800, 22, 50, "clear sky");
        let tips = generate_farming_tips(&observation, &[], date(2024, 6, 15));

        assert_eq!(
            matched_rules(&observation, &[], date(2024, 6, 15)),
            vec![
                "temperature.optimal",
                "sky.clear",
                "season.summer",
                "practice.water_conservation",
                "practice.pollinators",
                "practice.uv_protection",
            ]
        );
        assert_eq!(tips.len(), 7);
        assert!(titles(&tips).contains(&catalog::OPTIMAL_GROWING.title));
        assert!(titles(&tips).contains(&catalog::POLLINATORS.title));
        assert!(!tips.iter().any(|t| t.title.contains("Humidity")));
    }

    #[test]
    fn thunderstorm_in_extreme_heat() {
        let observation = WeatherObservation::new(211, 40, 50, "thunderstorm");
        let tips = generate_farming_tips(&observation, &[], date(2024, 6, 15));

        let urgent: Vec<&str> = tips.iter().filter(|t| t.is_urgent()).map(|t| t.title.as_str()).collect();
        assert_eq!(
            urgent,
            vec![
                catalog::EXTREME_HEAT.title,
                catalog::SEVERE_STORM.title,
                catalog::LIGHTNING_SAFETY.title,
            ]
        );
        assert!(tips[..3].iter().all(Tip::is_urgent));
        assert!(!matched_rules(&observation, &[], date(2024, 6, 15))
            .iter()
            .any(|rule| rule.starts_with("humidity.")));
    }

    #[test]
    fn snow_below_freezing() {
        let observation = WeatherObservation::new(600, -5, 50, "snow");
        let tips = generate_farming_tips(&observation, &[], date(2024, 1, 10));

        assert_eq!(tips[0].title, catalog::SEVERE_FROST.title);
        assert_eq!(tips[0].tip_type, TipType::Warning);
        assert!(titles(&tips).contains(&catalog::SNOW_MANAGEMENT.title));
        assert!(titles(&tips).contains(&catalog::WINTER_PLANNING.title));
    }

    #[test]
    fn already_raining_skips_rain_forecast() {
        let observation = WeatherObservation::new(500, 20, 75, "light rain");
        let forecast = vec![forecast_day(22, 15, 20), forecast_day(21, 14, 70), forecast_day(23, 15, 10)];
        let tips = generate_farming_tips(&observation, &forecast, date(2024, 6, 15));

        assert!(!titles(&tips).contains(&catalog::RAIN_COMING.title));
        assert!(titles(&tips).contains(&catalog::RAINY_WEATHER.title));
    }

    #[test]
    fn dry_day_warns_of_coming_rain() {
        let observation = WeatherObservation::new(802, 20, 55, "scattered clouds");
        let forecast = vec![forecast_day(22, 15, 20), forecast_day(21, 14, 70), forecast_day(23, 15, 10)];
        let tips = generate_farming_tips(&observation, &forecast, date(2024, 6, 15));

        assert!(titles(&tips).contains(&catalog::RAIN_COMING.title));
    }

    #[test]
    fn short_forecast_has_no_trend_tips() {
        let observation = WeatherObservation::new(802, 20, 55, "scattered clouds");
        let forecast = vec![forecast_day(40, -10, 95), forecast_day(40, -10, 95)];

        assert!(!matched_rules(&observation, &forecast, date(2024, 6, 15))
            .iter()
            .any(|rule| rule.starts_with("forecast_trends.")));
    }

    #[test]
    fn season_follows_reference_date() {
        let observation = WeatherObservation::new(999, 14, 55, "haze-free plain text");
        let season = |d: NaiveDate| -> Vec<String> {
            matched_rules(&observation, &[], d)
                .into_iter()
                .filter(|rule| rule.starts_with("season."))
                .collect()
        };

        assert_eq!(season(date(2024, 3, 1)), vec!["season.spring"]);
        assert_eq!(season(date(2024, 7, 1)), vec!["season.summer"]);
        assert_eq!(season(date(2024, 10, 31)), vec!["season.fall"]);
        assert_eq!(season(date(2024, 12, 1)), vec!["season.winter"]);
        assert_eq!(season(date(2025, 2, 28)), vec!["season.winter"]);
    }

    #[test]
    fn quiet_conditions_still_give_advice() {
        let observation = WeatherObservation::new(999, 14, 55, "haze-free plain text");
        let tips = generate_farming_tips(&observation, &[], date(2024, 6, 15));

        assert!(!tips.is_empty());
        assert_eq!(tips[0].title, catalog::SUMMER.title);
    }
}

// =============================================================================
// Property tests
// =============================================================================

mod properties {
    use super::*;

    fn weather_code_strategy() -> impl Strategy<Value = i32> {
        prop_oneof![
            prop::sample::select(vec![211, 500, 520, 600, 721, 741, 761, 800, 801, 802, 803]),
            0..1000i32,
        ]
    }

    fn condition_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "clear sky",
            "few clouds",
            "overcast clouds",
            "light rain",
            "heavy intensity rain",
            "thunderstorm with rain",
            "snow",
            "mist",
            "windy",
            "",
        ])
        .prop_map(String::from)
    }

    fn forecast_strategy() -> impl Strategy<Value = Vec<ForecastDay>> {
        prop::collection::vec(
            (-20..45i32, 0..15i32, 0..=100i32)
                .prop_map(|(high, spread, pop)| forecast_day(high, high - spread, pop)),
            0..6,
        )
    }

    fn observation_strategy() -> impl Strategy<Value = WeatherObservation> {
        (weather_code_strategy(), -30..50i32, 0..=100i32, condition_strategy()).prop_map(
            |(code, temperature, humidity, condition)| {
                WeatherObservation::new(code, temperature, humidity, condition)
            },
        )
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2020..2030i32, 1..=12u32, 1..=28u32).prop_map(|(y, m, d)| date(y, m, d))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Advice is never empty and never longer than the display limit
        #[test]
        fn prop_tip_count_bounded(
            observation in observation_strategy(),
            forecast in forecast_strategy(),
            today in date_strategy(),
        ) {
            let tips = generate_farming_tips(&observation, &forecast, today);
            prop_assert!(!tips.is_empty());
            prop_assert!(tips.len() <= MAX_TIPS);
        }

        /// Most urgent advice comes first
        #[test]
        fn prop_tips_sorted_by_priority(
            observation in observation_strategy(),
            forecast in forecast_strategy(),
            today in date_strategy(),
        ) {
            let tips = generate_farming_tips(&observation, &forecast, today);
            prop_assert!(tips.windows(2).all(|w| w[0].priority <= w[1].priority));
        }

        /// Same inputs, same advice
        #[test]
        fn prop_deterministic(
            observation in observation_strategy(),
            forecast in forecast_strategy(),
            today in date_strategy(),
        ) {
            prop_assert_eq!(
                generate_farming_tips(&observation, &forecast, today),
                generate_farming_tips(&observation, &forecast, today)
            );
        }

        /// Exactly one seasonal rule fires for any date
        #[test]
        fn prop_one_season(
            observation in observation_strategy(),
            today in date_strategy(),
        ) {
            let seasons = matched_rules(&observation, &[], today)
                .into_iter()
                .filter(|rule| rule.starts_with("season."))
                .count();
            prop_assert_eq!(seasons, 1);
        }

        /// Trend rules stay silent until three forecast days are available
        #[test]
        fn prop_trends_need_three_days(
            observation in observation_strategy(),
            forecast in prop::collection::vec(
                (-20..45i32, 0..=100i32).prop_map(|(high, pop)| forecast_day(high, high - 10, pop)),
                0..3,
            ),
            today in date_strategy(),
        ) {
            prop_assert!(!matched_rules(&observation, &forecast, today)
                .iter()
                .any(|rule| rule.starts_with("forecast_trends.")));
        }
    }
}
