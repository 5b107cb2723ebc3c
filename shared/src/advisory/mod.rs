//! Farming advisory rules engine
//!
//! Maps current conditions and a short forecast onto a prioritized list of
//! farming tips. Rules are grouped into categories that are evaluated in a
//! fixed order:
//!
//! 1. temperature bands
//! 2. humidity bands
//! 3. sky condition keywords
//! 4. weather code ranges
//! 5. forecast trends (only with at least three forecast days)
//! 6. season
//! 7. general practice (conservation, pollinators, UV, soil health, preparedness)
//!
//! Within a cascading category only the first matching rule contributes; in
//! the other categories every matching rule does. The result is stably sorted
//! by priority and capped at [`MAX_TIPS`] entries, and is never empty.

use chrono::{Datelike, NaiveDate};

use crate::models::{ForecastDay, Tip, WeatherObservation};

pub mod catalog;

use catalog::TipTemplate;

/// Upper bound on the number of tips returned
pub const MAX_TIPS: usize = 8;

/// Forecast trend rules need at least this many days
pub const TREND_MIN_DAYS: usize = 3;

/// Everything a rule predicate may inspect
#[derive(Debug, Clone)]
pub struct Conditions<'a> {
    pub temperature: i32,
    pub humidity: i32,
    /// Lowercased condition text
    pub condition: String,
    pub weather_code: i32,
    pub forecast: &'a [ForecastDay],
    /// 0 = January
    pub month0: u32,
}

impl<'a> Conditions<'a> {
    pub fn new(observation: &WeatherObservation, forecast: &'a [ForecastDay], today: NaiveDate) -> Self {
        Self {
            temperature: observation.temperature,
            humidity: observation.humidity,
            condition: observation.condition.to_lowercase(),
            weather_code: observation.weather_code,
            forecast,
            month0: today.month0(),
        }
    }

    fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.condition.contains(k))
    }

    fn mentions_rain(&self) -> bool {
        self.mentions(&["rain", "drizzle", "shower"])
    }

    fn has_trend_window(&self) -> bool {
        self.forecast.len() >= TREND_MIN_DAYS
    }

    fn any_day(&self, predicate: impl Fn(&ForecastDay) -> bool) -> bool {
        self.has_trend_window() && self.forecast.iter().any(predicate)
    }
}

/// A predicate and the tips it contributes when it holds
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Conditions<'_>) -> bool,
    pub tips: &'static [TipTemplate],
}

/// How rules inside a category combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Only the first applicable rule fires
    FirstMatch,
    /// Every applicable rule fires
    Every,
}

/// An ordered category of rules
pub struct RuleGroup {
    pub name: &'static str,
    pub selection: Selection,
    pub rules: &'static [Rule],
}

impl RuleGroup {
    /// Rules of this group that fire for `conditions`, in declaration order
    pub fn matching(&self, conditions: &Conditions<'_>) -> Vec<&'static Rule> {
        let mut applicable = self.rules.iter().filter(|rule| (rule.applies)(conditions));
        match self.selection {
            Selection::FirstMatch => applicable.next().into_iter().collect(),
            Selection::Every => applicable.collect(),
        }
    }

    /// Tips contributed by this group, in insertion order
    pub fn tips(&self, conditions: &Conditions<'_>) -> Vec<Tip> {
        self.matching(conditions)
            .into_iter()
            .flat_map(|rule| rule.tips.iter())
            .map(TipTemplate::to_tip)
            .collect()
    }
}

use catalog as c;

pub static TEMPERATURE: RuleGroup = RuleGroup {
    name: "temperature",
    selection: Selection::FirstMatch,
    rules: &[
        Rule { name: "extreme_heat", applies: |x| x.temperature > 38, tips: &[c::EXTREME_HEAT] },
        Rule {
            name: "severe_heat",
            applies: |x| x.temperature > 35,
            tips: &[c::SEVERE_HEAT, c::LIVESTOCK_HEAT],
        },
        Rule { name: "hot", applies: |x| x.temperature > 30, tips: &[c::HOT_WEATHER_CARE] },
        Rule { name: "severe_frost", applies: |x| x.temperature < 0, tips: &[c::SEVERE_FROST] },
        Rule { name: "frost", applies: |x| x.temperature < 5, tips: &[c::FROST_PROTECTION] },
        Rule {
            name: "cold",
            applies: |x| x.temperature < 10,
            tips: &[c::COLD_WEATHER, c::WINTER_CROPS],
        },
        Rule {
            name: "optimal",
            applies: |x| (18..=28).contains(&x.temperature),
            tips: &[c::OPTIMAL_GROWING],
        },
    ],
};

pub static HUMIDITY: RuleGroup = RuleGroup {
    name: "humidity",
    selection: Selection::FirstMatch,
    rules: &[
        Rule { name: "very_high", applies: |x| x.humidity > 90, tips: &[c::CRITICAL_DISEASE_RISK] },
        Rule {
            name: "high",
            applies: |x| x.humidity > 85,
            tips: &[c::HIGH_FUNGAL_ALERT, c::DISEASE_PREVENTION],
        },
        Rule { name: "moderate", applies: |x| x.humidity > 70, tips: &[c::DISEASE_WATCH] },
        Rule { name: "very_low", applies: |x| x.humidity < 25, tips: &[c::SEVERE_DROUGHT] },
        Rule { name: "low", applies: |x| x.humidity < 40, tips: &[c::LOW_HUMIDITY] },
    ],
};

pub static SKY: RuleGroup = RuleGroup {
    name: "sky",
    selection: Selection::FirstMatch,
    rules: &[
        Rule {
            name: "heavy_rain",
            applies: |x| x.mentions_rain() && x.mentions(&["heavy", "storm"]),
            tips: &[c::HEAVY_RAIN, c::RAINWATER_HARVESTING],
        },
        Rule {
            name: "rain",
            applies: |x| x.mentions_rain(),
            tips: &[c::RAINY_WEATHER, c::RAINWATER_HARVESTING],
        },
        Rule {
            name: "clear",
            applies: |x| x.mentions(&["sunny", "clear"]),
            tips: &[c::HARVEST_WEATHER, c::FIELD_OPERATIONS],
        },
        Rule {
            name: "cloudy",
            applies: |x| x.mentions(&["cloud", "overcast"]),
            tips: &[c::CLOUDY_BENEFITS, c::LOWER_EVAPORATION],
        },
        Rule { name: "windy", applies: |x| x.mentions(&["wind"]), tips: &[c::WINDY_CONDITIONS] },
    ],
};

pub static WEATHER_CODE: RuleGroup = RuleGroup {
    name: "weather_code",
    selection: Selection::FirstMatch,
    rules: &[
        Rule {
            name: "thunderstorm",
            applies: |x| (200..=233).contains(&x.weather_code),
            tips: &[c::SEVERE_STORM, c::LIGHTNING_SAFETY],
        },
        Rule {
            name: "snow",
            applies: |x| (600..=623).contains(&x.weather_code),
            tips: &[c::SNOW_MANAGEMENT, c::WINTER_PLANNING],
        },
        Rule { name: "fog", applies: |x| matches!(x.weather_code, 721 | 741), tips: &[c::FOG] },
        Rule {
            name: "dust",
            applies: |x| (731..=781).contains(&x.weather_code),
            tips: &[c::DUST_STORM],
        },
    ],
};

pub static FORECAST_TRENDS: RuleGroup = RuleGroup {
    name: "forecast_trends",
    selection: Selection::Every,
    rules: &[
        // Skipped when it is already raining, the sky rules cover that
        Rule {
            name: "rain_coming",
            applies: |x| x.any_day(|d| d.precipitation > 60) && !x.condition.contains("rain"),
            tips: &[c::RAIN_COMING],
        },
        Rule {
            name: "heat_wave_coming",
            applies: |x| x.any_day(|d| d.high > 32) && x.temperature < 30,
            tips: &[c::HEAT_WAVE_COMING],
        },
        Rule {
            name: "cold_snap_coming",
            applies: |x| x.any_day(|d| d.low < 5) && x.temperature > 10,
            tips: &[c::COLD_SNAP_COMING],
        },
    ],
};

pub static SEASON: RuleGroup = RuleGroup {
    name: "season",
    selection: Selection::FirstMatch,
    rules: &[
        Rule { name: "spring", applies: |x| (2..=4).contains(&x.month0), tips: &[c::SPRING] },
        Rule { name: "summer", applies: |x| (5..=7).contains(&x.month0), tips: &[c::SUMMER] },
        Rule { name: "fall", applies: |x| (8..=10).contains(&x.month0), tips: &[c::HARVEST_SEASON] },
        Rule { name: "winter", applies: |_| true, tips: &[c::WINTER] },
    ],
};

pub static PRACTICE: RuleGroup = RuleGroup {
    name: "practice",
    selection: Selection::Every,
    rules: &[
        Rule {
            name: "water_conservation",
            applies: |x| x.temperature > 25 || x.humidity < 60,
            tips: &[c::WATER_CONSERVATION],
        },
        Rule {
            name: "pollinators",
            applies: |x| (15..=28).contains(&x.temperature) && x.humidity > 40 && x.humidity < 80,
            tips: &[c::POLLINATORS],
        },
        Rule {
            name: "uv_protection",
            applies: |x| matches!(x.weather_code, 800 | 801),
            tips: &[c::UV_PROTECTION],
        },
        Rule {
            name: "soil_health",
            applies: |x| x.month0 >= 9 || x.month0 <= 3,
            tips: &[c::SOIL_HEALTH],
        },
        Rule {
            name: "emergency_preparedness",
            applies: |x| (200..=781).contains(&x.weather_code) && x.weather_code != 800,
            tips: &[c::EMERGENCY_PREPAREDNESS],
        },
    ],
};

/// All categories, in evaluation order
pub static RULE_GROUPS: [&RuleGroup; 7] = [
    &TEMPERATURE,
    &HUMIDITY,
    &SKY,
    &WEATHER_CODE,
    &FORECAST_TRENDS,
    &SEASON,
    &PRACTICE,
];

/// Tips appended when no rule fires at all
pub const FALLBACK_TIPS: [TipTemplate; 2] = [c::DAILY_CHECKLIST, c::SUSTAINABLE_PRACTICES];

/// Generate farming tips for the current conditions
///
/// `forecast` is ordered with today first; `today` selects the seasonal
/// advice, so the result depends only on the arguments.
pub fn generate_farming_tips(
    observation: &WeatherObservation,
    forecast: &[ForecastDay],
    today: NaiveDate,
) -> Vec<Tip> {
    let conditions = Conditions::new(observation, forecast, today);
    let tips = RULE_GROUPS
        .iter()
        .flat_map(|group| group.tips(&conditions))
        .collect();

    finalize(tips)
}

/// Names of the rules that fire, as `group.rule`
pub fn matched_rules(
    observation: &WeatherObservation,
    forecast: &[ForecastDay],
    today: NaiveDate,
) -> Vec<String> {
    let conditions = Conditions::new(observation, forecast, today);
    RULE_GROUPS
        .iter()
        .flat_map(|group| {
            group
                .matching(&conditions)
                .into_iter()
                .map(move |rule| format!("{}.{}", group.name, rule.name))
        })
        .collect()
}

fn finalize(mut tips: Vec<Tip>) -> Vec<Tip> {
    if tips.is_empty() {
        tips.extend(FALLBACK_TIPS.iter().map(TipTemplate::to_tip));
    }
    // sort_by_key is stable: equal priorities keep rule order
    tips.sort_by_key(|tip| tip.priority);
    tips.truncate(MAX_TIPS);
    tips
}
