//! Color names and their Scryfall letter codes
//!
//! Covers the five colors, the ten Ravnica guilds, the Alara shards and the
//! Tarkir wedges. Used by the knowledge tables and for `c:` suggestions.

pub const SINGLE_COLORS: &[(&str, &str)] = &[
    ("white", "w"),
    ("blue", "u"),
    ("black", "b"),
    ("red", "r"),
    ("green", "g"),
];

pub const GUILDS: &[(&str, &str)] = &[
    ("azorius", "wu"),
    ("dimir", "ub"),
    ("rakdos", "br"),
    ("gruul", "rg"),
    ("selesnya", "gw"),
    ("orzhov", "wb"),
    ("izzet", "ur"),
    ("golgari", "bg"),
    ("boros", "rw"),
    ("simic", "gu"),
];

pub const SHARDS: &[(&str, &str)] = &[
    ("bant", "gwu"),
    ("esper", "wub"),
    ("grixis", "ubr"),
    ("jund", "brg"),
    ("naya", "rgw"),
];

pub const WEDGES: &[(&str, &str)] = &[
    ("abzan", "wbg"),
    ("jeskai", "urw"),
    ("sultai", "bgu"),
    ("mardu", "rwb"),
    ("temur", "gur"),
];

/// Letter code for a color, guild, shard or wedge name (case-insensitive).
pub fn color_code(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();

    [SINGLE_COLORS, GUILDS, SHARDS, WEDGES]
        .into_iter()
        .flatten()
        .find(|(color, _)| *color == name)
        .map(|(_, code)| *code)
}

pub(crate) fn names<'a>(
    table: &'a [(&'static str, &'static str)],
) -> impl Iterator<Item = &'static str> + 'a {
    table.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_single() {
        assert_eq!(color_code("blue"), Some("u"));
    }

    #[test]
    fn test_color_code_guild_shard_wedge() {
        assert_eq!(color_code("Azorius"), Some("wu"));
        assert_eq!(color_code("bant"), Some("gwu"));
        assert_eq!(color_code("TEMUR"), Some("gur"));
    }

    #[test]
    fn test_color_code_unknown() {
        assert_eq!(color_code("purple"), None);
        assert_eq!(color_code(""), None);
    }

    #[test]
    fn test_names_lists_table_order() {
        let guilds: Vec<&str> = names(GUILDS).collect();
        assert_eq!(guilds.len(), 10);
        assert_eq!(guilds[0], "azorius");
        assert_eq!(names(SINGLE_COLORS).count(), 5);
    }
}
