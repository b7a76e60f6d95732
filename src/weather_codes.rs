/// Sentinel returned for codes outside the WMO 4677 table
pub const UNKNOWN: &str = "unbekannt";

/// German descriptions for the WMO 4677 present weather codes, indexed by code.
const DESCRIPTIONS: [&str; 100] = [
    "Wolkenentwicklung nicht bekannt, letzte Stunde",
    "Abnehmende Bewölkung, letzte Stunde",
    "Keine Bewölkungsänderung, letzte Stunde",
    "Zunehmende Bewölkung, letzte Stunde",
    "Sicht durch Rauch reduziert",
    "Dunst",
    "Schwebender Staub, ohne Windeinwirkung",
    "Staub oder Sand, vom Wind gehoben",
    "Staubteufel",
    "Staub- oder Sandsturm an der Station, oder in Sichtweite",
    "feuchter Dunst/schwacher Nebel",
    "Nebelschwaden am Boden",
    "Durchgehend Bodennebel",
    "Wetterleuchten (kein Donner)",
    "Niederschlag sichtbar, erreicht nicht den Boden",
    "Niederschlag in der Ferne, erreicht Boden",
    "Niederschlag in der Nähe, erreicht Boden",
    "Gewitter hörbar, kein Niederschlag",
    "Markante Windböen",
    "Tornado, Wasserhose oder Funnel",
    "Nach Sprühregen",
    "Nach Regen",
    "Nach Schnee",
    "Nach Schneeregen",
    "Nach gefrierendem Regen",
    "Nach Regenschauern",
    "Nach Schneeschauern",
    "Nach Hagelschauern",
    "Nach Nebel",
    "Nach Gewitter",
    "Leichter/mäßiger Sandsturm, nachlassend",
    "Leichter/mäßiger Sandsturm, gleichbleibend",
    "Leichter/mäßiger Sandsturm, zunehmend",
    "Schwerer Sandsturm, nachlassend",
    "Schwerer Sandsturm, gleichbleibend",
    "Schwerer Sandsturm, zunehmend",
    "Leichtes/mäßiges Schneefegen",
    "Starkes Schneefegen",
    "Leichtes/mäßiges Schneetreiben",
    "Starkes Schneetreiben",
    "Nebel in der Ferne",
    "Nebelschwaden",
    "Nebel, Himmel sichtbar, abnehmend",
    "Nebel, Himmel verdeckt, abnehmend",
    "Nebel, Himmel sichtbar, gleichbleibend",
    "Nebel, Himmel verdeckt, gleichbleibend",
    "Nebel, Himmel sichtbar, zunehmend",
    "Nebel, Himmel verdeckt, zunehmend",
    "Raueis mit Nebel, Himmel sichtbar",
    "Raueis mit Nebel, Himmel verdeckt",
    "Leichter Sprühregen, unterbrochen",
    "Leichter Sprühregen, anhaltend",
    "Mäßiger Sprühregen, unterbrochen",
    "Mäßiger Sprühregen, anhaltend",
    "Starker Sprühregen, unterbrochen",
    "Starker Sprühregen, anhaltend",
    "Gefrierender Sprühregen, leicht",
    "Gefrierender Sprühregen, mäßig/stark",
    "Leichter Regen und Sprühregen",
    "Mäßiger/Starker Regen und Sprühregen",
    "Leichter Regen, unterbrochen",
    "Leichter Regen, anhaltend",
    "Mäßiger Regen, unterbrochen",
    "Mäßiger Regen, anhaltend",
    "Starker Regen, unterbrochen",
    "Starker Regen, anhaltend",
    "Gefrierender leichter Regen",
    "Gefrierender mäßiger/starker Regen",
    "Leichter Schneeregen",
    "Mäßiger/Starker Schneeregen",
    "Leichter Schneefall, unterbrochen",
    "Leichter Schneefall, anhaltend",
    "Mäßiger Schneefall, unterbrochen",
    "Mäßiger Schneefall, anhaltend",
    "Starker Schneefall, unterbrochen",
    "Starker Schneefall, anhaltend",
    "Eisnadeln",
    "Schneegriesel",
    "Schneekristalle",
    "Eiskörner",
    "Leichte Regenschauer",
    "Starke Regenschauer",
    "Sintflutartige Regenschauer",
    "Leichte Schneeregenschauer",
    "Starke Schneeregenschauer",
    "Leichte Schneeschauer",
    "Starke Schneeschauer",
    "Leichte Graupelschauer",
    "Starke Graupelschauer",
    "Leichte Hagelschauer ohne Gewitter",
    "Starke Hagelschauer ohne Gewitter",
    "Leichter Regen, letzte Stunde Gewitter hörbar",
    "Starker Regen, letzte Stunde Gewitter hörbar",
    "Leichter Schnee/Regen-Hagel, letzte Stunde Gewitter hörbar",
    "Starker Schnee/Regen-Hagel, letzte Stunde Gewitter hörbar",
    "Leichtes/mäßiges Gewitter mit Regen/Schnee",
    "Leichtes/mäßiges Gewitter mit Hagel",
    "Schweres Gewitter mit Regen/Schnee",
    "Gewitter mit Sandsturm",
    "Schweres Gewitter mit Hagel",
];

/// Returns the German description for a WMO weather code.
///
/// Codes outside 0..=99 yield [`UNKNOWN`].
///
/// # Arguments
///
/// * 'code' - the weather code as reported by the forecast provider
pub fn describe(code: i64) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|i| DESCRIPTIONS.get(i))
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Same as [`describe`] but for provider values that may be missing
///
/// # Arguments
///
/// * 'code' - the weather code, `None` if the provider had a gap
pub fn describe_opt(code: Option<i64>) -> &'static str {
    code.map_or(UNKNOWN, describe)
}
