//! Built-in Magic: The Gathering knowledge data

use super::{Category, KnowledgeTables, TermGroup};
use crate::colors::{self, GUILDS, SHARDS, SINGLE_COLORS, WEDGES};

const CARD_TYPES: &[&str] = &[
    "creature",
    "instant",
    "sorcery",
    "artifact",
    "enchantment",
    "planeswalker",
    "land",
    "tribal",
];

const SUPERTYPES: &[&str] = &["basic", "legendary", "snow", "world"];

const EVERGREEN_KEYWORDS: &[&str] = &[
    "flying",
    "first strike",
    "double strike",
    "deathtouch",
    "haste",
    "hexproof",
    "indestructible",
    "lifelink",
    "menace",
    "reach",
    "trample",
    "vigilance",
    "ward",
];

const OTHER_KEYWORDS: &[&str] = &[
    "flashback", "scry", "convoke", "delve", "cycling", "kicker", "morph", "suspend", "echo",
    "buyback", "madness", "threshold", "storm", "affinity", "dredge", "bloodthirst", "unleash",
    "evolve", "cipher", "bestow", "prowess", "dash", "exploit", "megamorph", "awaken", "surge",
    "skulk", "emerge", "escalate", "crew", "fabricate", "energy", "revolt", "improvise",
    "aftermath", "embalm", "eternalize", "afflict", "ascend", "jump-start", "mentor",
    "undergrowth", "surveil", "spectacle", "riot", "addendum", "afterlife", "amass", "escape",
    "companion", "mutate", "cycling", "kicker", "landfall", "party", "foretell", "boast",
    "disturb", "cleave", "training", "decayed", "daybound", "nightbound",
];

const CONSTRUCTED_FORMATS: &[&str] = &[
    "standard",
    "pioneer",
    "modern",
    "legacy",
    "vintage",
    "commander",
    "pauper",
    "historic",
];

const LIMITED_FORMATS: &[&str] = &["draft", "sealed"];

const CASUAL_FORMATS: &[&str] = &["commander", "edh", "brawl", "oathbreaker", "60-card-casual"];

const DECK_ARCHETYPES: &[&str] = &[
    "aggro",
    "control",
    "midrange",
    "combo",
    "tempo",
    "ramp",
    "mill",
    "burn",
    "tribal",
    "toolbox",
    "prison",
    "stax",
    "storm",
    "dredge",
    "reanimator",
    "delver",
    "voltron",
    "group hug",
    "pillowfort",
    "aristocrats",
];

const ZONES: &[&str] = &[
    "battlefield",
    "graveyard",
    "hand",
    "library",
    "exile",
    "stack",
    "command",
];

const ACTIONS: &[&str] = &[
    "cast",
    "play",
    "activate",
    "attack",
    "block",
    "tap",
    "untap",
    "destroy",
    "exile",
    "return",
    "search",
    "sacrifice",
    "discard",
    "draw",
    "mill",
    "scry",
    "surveil",
    "explore",
    "adapt",
    "monstrosity",
];

const CARD_ADVANTAGE: &[&str] = &[
    "card advantage",
    "tempo",
    "value",
    "2-for-1",
    "cantrip",
    "card selection",
    "card quality",
    "virtual card advantage",
    "board presence",
];

const SLANG: &[&str] = &[
    "etb",
    "ltb",
    "eot",
    "eob",
    "gy",
    "cmc",
    "p/t",
    "rtfc",
    "bolt",
    "doom blade",
    "wrath",
    "tutor",
    "ramp",
    "dork",
    "lord",
    "hate bear",
    "french vanilla",
];

const CARD_TYPE_INFO: &[(&str, &str)] = &[
    ("creature", "Permanents that can attack and block. They have power and toughness."),
    ("instant", "Spells that can be cast at any time you have priority, including during combat and on opponents' turns."),
    ("sorcery", "Spells that can only be cast during your main phases when the stack is empty."),
    ("artifact", "Permanents representing magical items. Many have activated abilities."),
    ("enchantment", "Permanents representing ongoing magical effects."),
    ("planeswalker", "Permanents representing powerful allies with loyalty abilities."),
    ("land", "Permanents that produce mana and enable casting other spells."),
    ("tribal", "Cards that have creature types but aren't necessarily creatures themselves."),
];

const CARD_TYPE_EXAMPLES: &[(&str, &[&str])] = &[
    ("creature", &["Tarmogoyf", "Snapcaster Mage", "Llanowar Elves"]),
    ("instant", &["Lightning Bolt", "Counterspell", "Path to Exile"]),
    ("sorcery", &["Wrath of God", "Demonic Tutor", "Time Walk"]),
    ("artifact", &["Sol Ring", "Sword of Fire and Ice", "Mox Ruby"]),
    ("enchantment", &["Rhystic Study", "Smothering Tithe", "Necropotence"]),
    ("planeswalker", &["Jace, the Mind Sculptor", "Liliana of the Veil", "Chandra, Torch of Defiance"]),
    ("land", &["Fetch Lands", "Shock Lands", "Dual Lands"]),
];

const KEYWORD_INFO: &[(&str, &str)] = &[
    ("flying", "This creature can only be blocked by creatures with flying or reach."),
    ("trample", "Excess combat damage is dealt to the defending player."),
    ("deathtouch", "Any amount of damage this deals to a creature destroys it."),
    ("lifelink", "Damage dealt by this source also causes you to gain that much life."),
    ("haste", "This creature can attack and use tap abilities the turn it enters."),
    ("vigilance", "This creature doesn't tap when attacking."),
    ("first strike", "This creature deals combat damage before creatures without first strike."),
    ("double strike", "This creature deals first strike and regular combat damage."),
    ("hexproof", "This permanent can't be targeted by opponents' spells or abilities."),
    ("indestructible", "This permanent can't be destroyed by damage or effects that say \"destroy\"."),
    ("menace", "This creature can't be blocked except by two or more creatures."),
    ("reach", "This creature can block creatures with flying."),
    ("ward", "Whenever this becomes the target of a spell or ability an opponent controls, counter it unless they pay the ward cost."),
];

const KEYWORD_EXAMPLES: &[(&str, &[&str])] = &[
    ("flying", &["Serra Angel", "Delver of Secrets", "Dragon Hatchling"]),
    ("trample", &["Tarmogoyf", "Craterhoof Behemoth", "Ghalta, Primal Hunger"]),
    ("deathtouch", &["Vampire Nighthawk", "Deadly Recluse", "Thornweald Archer"]),
    ("lifelink", &["Vampire Nighthawk", "Baneslayer Angel", "Rhox Faithmender"]),
    ("haste", &["Goblin Guide", "Ball Lightning", "Dragon Hatchling"]),
];

const COLOR_INFO: &[(&str, &str)] = &[
    ("white", "The color of order, peace, law, and structure. Focuses on small efficient creatures, lifegain, and removal."),
    ("blue", "The color of knowledge, logic, and control. Specializes in card draw, counterspells, and tempo."),
    ("black", "The color of power, ambition, and sacrifice. Uses life as a resource and excels at removal and recursion."),
    ("red", "The color of freedom, emotion, and chaos. Aggressive with direct damage and hasty creatures."),
    ("green", "The color of nature, growth, and instinct. Has the biggest creatures and mana acceleration."),
    ("azorius", "White-blue guild focused on control, law enforcement, and bureaucracy."),
    ("dimir", "Blue-black guild specializing in information, secrets, and manipulation."),
    ("rakdos", "Black-red guild of entertainment, chaos, and violent spectacle."),
    ("gruul", "Red-green guild embracing wild nature and anti-civilization sentiment."),
    ("selesnya", "Green-white guild promoting community, growth, and harmony."),
];

const COLOR_EXAMPLES: &[(&str, &[&str])] = &[
    ("white", &["Wrath of God", "Swords to Plowshares", "Serra Angel"]),
    ("blue", &["Counterspell", "Ancestral Recall", "Jace, the Mind Sculptor"]),
    ("black", &["Dark Ritual", "Necropotence", "Liliana of the Veil"]),
    ("red", &["Lightning Bolt", "Goblin Guide", "Chandra, Torch of Defiance"]),
    ("green", &["Birds of Paradise", "Tarmogoyf", "Green Sun's Zenith"]),
    ("azorius", &["Supreme Verdict", "Sphinx's Revelation", "Teferi, Hero of Dominaria"]),
];

const FORMAT_INFO: &[(&str, &str)] = &[
    ("standard", "Rotating format using approximately the last 2 years of sets."),
    ("modern", "Non-rotating format using sets from 8th Edition/Mirrodin forward."),
    ("legacy", "Eternal format allowing all cards except those on the banned list."),
    ("vintage", "Eternal format allowing all cards, with some restricted to 1 copy."),
    ("commander", "100-card singleton multiplayer format with a legendary commander."),
    ("pauper", "Format using only cards printed at common rarity."),
    ("pioneer", "Non-rotating format using sets from Return to Ravnica forward."),
];

const FORMAT_EXAMPLES: &[(&str, &[&str])] = &[
    ("standard", &["Currently rotating sets", "Balanced power level", "FNM format"]),
    ("modern", &["Lightning Bolt legal", "High power level", "Large card pool"]),
    ("legacy", &["Force of Will legal", "Very high power", "Eternal format"]),
    ("commander", &["100 cards", "Singleton", "Multiplayer focused"]),
];

const DECK_INFO: &[(&str, &str)] = &[
    ("aggro", "Fast, aggressive strategy aiming to win quickly with efficient threats."),
    ("control", "Reactive strategy using counterspells and removal to win late game."),
    ("midrange", "Balanced approach with efficient threats and answers."),
    ("combo", "Deck built around specific card interactions to win instantly."),
    ("tempo", "Strategy focused on efficient plays that maintain pressure."),
    ("ramp", "Accelerates mana to cast expensive spells ahead of curve."),
    ("mill", "Wins by emptying opponent's library rather than dealing damage."),
    ("burn", "Direct damage strategy aiming to deal exactly 20 damage."),
];

const DECK_EXAMPLES: &[(&str, &[&str])] = &[
    ("aggro", &["Red Deck Wins", "White Weenie", "Affinity"]),
    ("control", &["Blue-White Control", "Esper Control", "Counter-Top"]),
    ("combo", &["Storm", "Dredge", "Reanimator"]),
    ("midrange", &["Jund", "Abzan", "Sultai"]),
];

impl KnowledgeTables {
    /// The built-in tables.
    pub fn standard() -> Self {
        let mut tables = KnowledgeTables::new()
            .with_group(TermGroup::CardTypes, CARD_TYPES.iter().copied())
            .with_group(TermGroup::Supertypes, SUPERTYPES.iter().copied())
            .with_group(TermGroup::EvergreenKeywords, EVERGREEN_KEYWORDS.iter().copied())
            .with_group(TermGroup::OtherKeywords, OTHER_KEYWORDS.iter().copied())
            .with_group(TermGroup::Colors, colors::names(SINGLE_COLORS))
            .with_group(TermGroup::Guilds, colors::names(GUILDS))
            .with_group(TermGroup::Shards, colors::names(SHARDS))
            .with_group(TermGroup::Wedges, colors::names(WEDGES))
            .with_group(TermGroup::ConstructedFormats, CONSTRUCTED_FORMATS.iter().copied())
            .with_group(TermGroup::LimitedFormats, LIMITED_FORMATS.iter().copied())
            .with_group(TermGroup::CasualFormats, CASUAL_FORMATS.iter().copied())
            .with_group(TermGroup::DeckArchetypes, DECK_ARCHETYPES.iter().copied())
            .with_group(TermGroup::Zones, ZONES.iter().copied())
            .with_group(TermGroup::Actions, ACTIONS.iter().copied())
            .with_group(TermGroup::CardAdvantage, CARD_ADVANTAGE.iter().copied())
            .with_group(TermGroup::Slang, SLANG.iter().copied());

        let details: [(Category, &[(&str, &str)], &[(&str, &[&str])]); 5] = [
            (Category::CardType, CARD_TYPE_INFO, CARD_TYPE_EXAMPLES),
            (Category::KeywordAbility, KEYWORD_INFO, KEYWORD_EXAMPLES),
            (Category::ColorIdentity, COLOR_INFO, COLOR_EXAMPLES),
            (Category::Format, FORMAT_INFO, FORMAT_EXAMPLES),
            (Category::DeckArchetype, DECK_INFO, DECK_EXAMPLES),
        ];

        for (category, info, examples) in details {
            for (term, text) in info {
                tables.set_information(category, term, text);
            }
            for (term, list) in examples {
                tables.set_examples(category, term, list.iter().copied());
            }
        }

        tables
    }
}
