//! Static catalogue of farming tips

use crate::models::{Tip, TipType};
use crate::models::TipType::{Info, Positive, Warning};

/// A tip whose text is known at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub tip_type: TipType,
    pub priority: u8,
}

impl TipTemplate {
    pub fn to_tip(&self) -> Tip {
        Tip {
            title: self.title.to_string(),
            description: self.description.to_string(),
            tip_type: self.tip_type,
            priority: self.priority,
        }
    }
}

const fn tip(title: &'static str, description: &'static str, tip_type: TipType, priority: u8) -> TipTemplate {
    TipTemplate {
        title,
        description,
        tip_type,
        priority,
    }
}

// ============================================================================
// Temperature
// ============================================================================

pub const EXTREME_HEAT: TipTemplate = tip(
    "🔥 Extreme Heat Emergency",
    "Critical heat stress conditions. Harvest early morning only. Use shade nets (50-70% coverage) for vegetables. Apply anti-transpirant sprays to reduce water loss. Move livestock to cooled barns with fans. Emergency irrigation may be needed.",
    Warning,
    1,
);

pub const SEVERE_HEAT: TipTemplate = tip(
    "☀️ Severe Heat Protection",
    "Provide shade cloth for tomatoes, peppers, and leafy greens. Water at 4-6 AM or after 7 PM to maximize absorption. Mulch depth should be 8-10 cm. Monitor for heat stress indicators: leaf curl, blossom drop, fruit sunscald.",
    Warning,
    1,
);

pub const LIVESTOCK_HEAT: TipTemplate = tip(
    "🐄 Livestock Heat Management",
    "Ensure 2x normal water supply. Add electrolytes to drinking water. Use misters or sprinklers in holding areas. Delay breeding activities. Provide salt blocks for mineral supplementation.",
    Warning,
    2,
);

pub const HOT_WEATHER_CARE: TipTemplate = tip(
    "🌡️ Hot Weather Crop Care",
    "Increase irrigation frequency by 30-40%. Apply organic mulch (straw, grass clippings). Consider temporary shade structures for sensitive crops. Delay transplanting to cooler evening hours. Monitor soil moisture at root depth (15-20 cm).",
    Info,
    2,
);

pub const SEVERE_FROST: TipTemplate = tip(
    "❄️ Severe Frost Emergency",
    "IMMEDIATE ACTION NEEDED: Use frost blankets, burlap, or plastic sheets before sunset. Run sprinklers to create ice shield on plants. Harvest all tender crops NOW. Drain irrigation systems. Bring potted plants indoors. Check livestock water every 2 hours.",
    Warning,
    1,
);

pub const FROST_PROTECTION: TipTemplate = tip(
    "🧊 Frost Protection Critical",
    "Deploy row covers and cloches. Use smudge pots or heaters in orchards. Water soil before sunset (moist soil retains heat). Harvest frost-sensitive vegetables (tomatoes, cucumbers, beans). Insulate water lines and protect pumps.",
    Warning,
    1,
);

pub const COLD_WEATHER: TipTemplate = tip(
    "🌬️ Cold Weather Strategies",
    "Delay planting warm-season crops (corn, soybeans, cotton). Use cold frames for early vegetables. Apply mulch around perennials. Check greenhouse heating systems. Good time to plant cool-season crops: peas, lettuce, spinach, onions.",
    Warning,
    2,
);

pub const WINTER_CROPS: TipTemplate = tip(
    "🥬 Winter Crop Opportunities",
    "Perfect for cole crops (broccoli, cabbage, cauliflower), root vegetables (carrots, beets, turnips), and winter grains (wheat, rye, barley). Apply winter cover crops to prevent soil erosion and improve soil health.",
    Positive,
    3,
);

pub const OPTIMAL_GROWING: TipTemplate = tip(
    "✅ Optimal Growing Conditions",
    "Ideal temperature range for most crops! Perfect for: transplanting seedlings, direct seeding vegetables, applying fertilizers, pest management activities, soil testing and amendments. Maximize field operations during these conditions.",
    Positive,
    3,
);

// ============================================================================
// Humidity
// ============================================================================

pub const CRITICAL_DISEASE_RISK: TipTemplate = tip(
    "⚠️ Critical Disease Risk - Very High Humidity",
    "EXTREME fungal disease risk! Apply preventive copper-based fungicides. Increase plant spacing for air circulation. Remove lower leaves touching soil. Avoid overhead irrigation completely. Monitor for late blight (tomatoes/potatoes), powdery mildew, and rust diseases.",
    Warning,
    1,
);

pub const HIGH_FUNGAL_ALERT: TipTemplate = tip(
    "🍄 High Fungal Disease Alert",
    "High risk of downy mildew, anthracnose, and bacterial leaf spot. Use drip irrigation only. Apply sulfur or neem oil preventively. Improve drainage in fields. Stake and prune plants for better airflow. Inspect crops daily for early disease signs.",
    Warning,
    1,
);

pub const DISEASE_PREVENTION: TipTemplate = tip(
    "🔬 Disease Prevention Protocol",
    "Space plants 20-30% wider than usual. Remove and destroy infected plant material immediately. Apply biological fungicides (Bacillus subtilis). Avoid working in wet fields to prevent disease spread. Use clean, sanitized tools.",
    Warning,
    2,
);

pub const DISEASE_WATCH: TipTemplate = tip(
    "💧 Moderate Humidity - Disease Watch",
    "Monitor for early blight, septoria leaf spot, and botrytis. Consider organic fungicides (copper, sulfur, neem oil). Ensure proper plant spacing (40-60 cm for tomatoes). Morning watering allows foliage to dry quickly.",
    Info,
    2,
);

pub const SEVERE_DROUGHT: TipTemplate = tip(
    "🏜️ Severe Drought Stress Alert",
    "Critical moisture deficit! Implement emergency irrigation schedule (daily if possible). Apply 10-15 cm of organic mulch. Consider hydrogel soil amendments. Install windbreaks to reduce transpiration. Monitor for spider mites and thrips (thrive in dry conditions).",
    Warning,
    1,
);

pub const LOW_HUMIDITY: TipTemplate = tip(
    "🌵 Low Humidity Management",
    "Increase irrigation frequency by 20-30%. Apply thick mulch layer. Use windbreaks or shade cloth to reduce evapotranspiration. Mist greenhouse crops 2-3 times daily. Monitor soil moisture at 15 cm depth. Watch for leaf tip burn and wilting.",
    Info,
    2,
);

// ============================================================================
// Sky conditions
// ============================================================================

pub const HEAVY_RAIN: TipTemplate = tip(
    "🌧️ Heavy Rain Protocol",
    "Check and clear drainage ditches immediately. Inspect for soil erosion and waterlogging. Support tall plants (corn, sunflowers). Cover harvested crops. Delay all fertilizer and pesticide applications. Risk of nutrient leaching in sandy soils.",
    Warning,
    1,
);

pub const RAINY_WEATHER: TipTemplate = tip(
    "☔ Rainy Weather Farming",
    "Postpone fertilizer applications for 24-48 hours. Ensure proper field drainage. Avoid field work on clay soils to prevent compaction. Good time for: equipment maintenance, record keeping, planning crop rotations, and indoor seed starting.",
    Info,
    2,
);

pub const RAINWATER_HARVESTING: TipTemplate = tip(
    "💧 Rainwater Harvesting Opportunity",
    "Collect rainwater in barrels or tanks for future irrigation. Natural rainfall is nitrogen-rich and chemical-free. After rain, wait until soil is 50-60% dry before working (squeeze test: soil should crumble, not form a ball).",
    Positive,
    3,
);

pub const HARVEST_WEATHER: TipTemplate = tip(
    "☀️ Perfect Harvest Weather",
    "Excellent for: harvesting grain crops (moisture content ideal), hay making (cure in 2-3 days), seed drying, post-harvest processing. Apply pesticides early morning for best efficacy. Low disease pressure. Ideal for soil preparation and planting.",
    Positive,
    3,
);

pub const FIELD_OPERATIONS: TipTemplate = tip(
    "🌾 Optimal Field Operations",
    "Best conditions for: plowing, disking, planting, cultivating between rows. Apply granular fertilizers (won't wash away). Scout fields for pest and disease. Excellent for farm tours and field inspections. Check irrigation systems.",
    Positive,
    3,
);

pub const CLOUDY_BENEFITS: TipTemplate = tip(
    "☁️ Cloudy Weather Benefits",
    "Perfect for transplanting (50% less transplant shock). Ideal for: grafting operations, applying foliar fertilizers (better absorption), pesticide application (slower evaporation). Reduced water stress on plants. Excellent for working livestock.",
    Positive,
    3,
);

pub const LOWER_EVAPORATION: TipTemplate = tip(
    "🌱 Lower Evaporation Advantage",
    "Reduce irrigation by 30-40% today. Plants experience less heat stress. Good conditions for: pruning, thinning fruit, weeding (less physical strain). Soil moisture stays consistent. Beneficial for seed germination.",
    Positive,
    3,
);

pub const WINDY_CONDITIONS: TipTemplate = tip(
    "💨 Windy Conditions Alert",
    "NO pesticide or fertilizer spraying (drift risk). Secure: plastic mulch, row covers, greenhouse panels, farm equipment. Support tall plants and young trees. Check irrigation systems for disruption. Delay drone operations. Wind speed >25 km/h: stay out of orchards (falling branch risk).",
    Warning,
    1,
);

// ============================================================================
// Weather codes
// ============================================================================

pub const SEVERE_STORM: TipTemplate = tip(
    "⛈️ Severe Storm Emergency Response",
    "URGENT: Move livestock to secure shelter. Secure all equipment and close greenhouse vents. Unplug electrical equipment. After storm: inspect for hail damage (bruised fruit, torn leaves), check for lodged crops, assess infrastructure damage, document losses for insurance.",
    Warning,
    1,
);

pub const LIGHTNING_SAFETY: TipTemplate = tip(
    "⚡ Lightning Safety Protocol",
    "STOP all field operations immediately. Avoid: metal equipment, tractors, open fields, tall trees, water sources. Wait 30 minutes after last thunder before resuming. Use downtime for: administrative tasks, maintenance planning, or inventory management.",
    Warning,
    1,
);

pub const SNOW_MANAGEMENT: TipTemplate = tip(
    "❄️ Snow Management for Farms",
    "Remove snow from greenhouse roofs (max load: 20-25 kg/m²). Ensure livestock have access to unfrozen water (use tank heaters). Increase feed rations by 20-30% for animals. Snow acts as natural insulation (good for winter wheat, garlic, perennials).",
    Warning,
    1,
);

pub const WINTER_PLANNING: TipTemplate = tip(
    "🌨️ Winter Planning Activities",
    "Use indoor time productively: order seeds and supplies for spring, plan crop rotations, maintain equipment, review last season's records, attend online farming webinars, prepare tax documents, calibrate equipment.",
    Positive,
    3,
);

pub const FOG: TipTemplate = tip(
    "🌫️ Fog - Limited Visibility",
    "Delay tractor and machinery operations until visibility >100 meters. Fog provides free moisture for crops (reduces irrigation needs). Good for: barn work, animal care, equipment maintenance. Excellent germination conditions for direct-seeded crops.",
    Info,
    2,
);

pub const DUST_STORM: TipTemplate = tip(
    "🌪️ Dust Storm Protection",
    "Cover sensitive crops with tarps or sheets. Bring small animals indoors. Close greenhouse vents. Protect water sources from contamination. After storm: wash vegetable leaves, check air filters on equipment. Plant windbreak trees/shrubs to prevent future damage.",
    Warning,
    1,
);

// ============================================================================
// Forecast trends
// ============================================================================

pub const RAIN_COMING: TipTemplate = tip(
    "🌧️ Rain Forecast - Prepare Now",
    "Heavy rain expected in next 3 days. Complete time-sensitive tasks: apply pre-emergent herbicides, fertilize fields, spray pesticides, harvest ripe crops, repair drainage systems, check field slopes for erosion risk, move equipment to dry storage.",
    Info,
    2,
);

pub const HEAT_WAVE_COMING: TipTemplate = tip(
    "🔥 Heat Wave Coming",
    "Hot weather approaching. Prepare: increase mulch depth, check irrigation systems, install shade structures, apply anti-transpirant to transplants, harvest heat-sensitive crops early, ensure livestock cooling systems work, store extra water.",
    Info,
    2,
);

pub const COLD_SNAP_COMING: TipTemplate = tip(
    "🥶 Cold Snap Warning",
    "Frost risk in coming days. Actions: harvest tender vegetables (tomatoes, peppers, cucumbers, eggplants), prepare frost protection materials, mulch around perennials, drain outdoor water systems, protect citrus trees, move cold-sensitive plants under cover.",
    Warning,
    1,
);

// ============================================================================
// Seasons
// ============================================================================

pub const SPRING: TipTemplate = tip(
    "🌸 Spring Season Activities",
    "Prepare seedbeds (till when soil temperature >10°C). Start composting. Test soil pH and nutrients. Prune fruit trees before bud break. Plant: potatoes, peas, lettuce, onions, carrots. Service farm equipment (tractors, planters, sprayers). Order seeds and supplies early.",
    Positive,
    3,
);

pub const SUMMER: TipTemplate = tip(
    "☀️ Summer Growing Season",
    "Monitor pests: aphids, caterpillars, beetles. Scout fields weekly. Implement IPM (Integrated Pest Management). Maintain consistent irrigation (1-2 inches/week). Practice crop rotation. Side-dress corn and tomatoes with nitrogen. Harvest continuously to encourage production.",
    Info,
    2,
);

pub const HARVEST_SEASON: TipTemplate = tip(
    "🍂 Harvest Season Focus",
    "Monitor crop maturity daily. Plan storage solutions (cure onions, dry beans). Process and preserve harvest. Plant cover crops immediately after harvest (prevents erosion, adds organic matter). Begin fall soil amendments. Order manure for spring application. Test grain moisture before storage.",
    Positive,
    3,
);

pub const WINTER: TipTemplate = tip(
    "❄️ Winter Planning & Maintenance",
    "Review farm records and analyze profitability. Plan next year's crop rotation. Order seeds (10-15% more than needed). Service and repair equipment. Attend agricultural workshops. Apply for grants and certifications. Build/repair infrastructure during downtime. Maintain livestock shelters.",
    Info,
    3,
);

// ============================================================================
// General practice
// ============================================================================

pub const WATER_CONSERVATION: TipTemplate = tip(
    "💧 Water Conservation Techniques",
    "Implement drip irrigation (60-70% water savings). Use soaker hoses for row crops. Mulch reduces evaporation by 50%. Practice deficit irrigation for established crops. Install rain sensors on irrigation controllers. Collect rainwater (1 inch on 1000 sq ft = 623 gallons). Monitor soil moisture with tensiometers.",
    Info,
    2,
);

pub const POLLINATORS: TipTemplate = tip(
    "🐝 Ideal for Pollinators & Beneficial Insects",
    "Peak activity for: bees, butterflies, ladybugs, lacewings, parasitic wasps. AVOID broad-spectrum pesticides (kills beneficials). Spray only if necessary, use targeted approaches. Plant pollinator-friendly flowers: sunflowers, zinnias, lavender. Maintain habitat strips along field edges.",
    Positive,
    3,
);

pub const UV_PROTECTION: TipTemplate = tip(
    "🌞 Strong UV Protection Needed",
    "Farm workers: wear wide-brimmed hats, long sleeves, sunscreen (SPF 30+), UV-blocking sunglasses. Take breaks in shade every 2 hours. Risk of fruit sunscald: use shade cloth over tomatoes, peppers, melons. Apply kaolin clay spray as natural UV protectant for fruit.",
    Info,
    2,
);

pub const SOIL_HEALTH: TipTemplate = tip(
    "🌱 Soil Health Improvement",
    "Apply compost (2-4 inches) to improve soil structure. Plant cover crops: clover (fixes nitrogen), rye (prevents erosion), radishes (break compaction). Test soil every 2-3 years. Add organic matter (increases water retention by 20-30%). Practice no-till farming to preserve soil microbiome.",
    Positive,
    3,
);

pub const EMERGENCY_PREPAREDNESS: TipTemplate = tip(
    "⚠️ Emergency Farm Preparedness",
    "Maintain emergency supplies: generator fuel, livestock feed (7-day supply), first aid kits, flashlights, battery-powered radio. Have backup water sources. Document all losses with photos for insurance. Keep emergency contact list: veterinarian, extension agent, insurance agent, equipment repair.",
    Info,
    2,
);

// ============================================================================
// Fallback
// ============================================================================

pub const DAILY_CHECKLIST: TipTemplate = tip(
    "📋 Daily Farm Management Checklist",
    "Conduct morning and evening crop inspections. Check irrigation systems daily. Monitor livestock health (appetite, behavior, manure). Record daily weather, tasks completed, observations. Calibrate equipment regularly. Maintain detailed farm records for tax and planning purposes.",
    Info,
    3,
);

pub const SUSTAINABLE_PRACTICES: TipTemplate = tip(
    "🌿 Sustainable Farming Practices",
    "Implement Integrated Pest Management (IPM). Use crop rotation (4-year cycle minimum). Maintain biodiversity with hedgerows and pollinator strips. Reduce chemical inputs gradually. Test soil regularly. Attend agricultural extension workshops. Join local farming cooperatives for knowledge sharing.",
    Positive,
    3,
);
