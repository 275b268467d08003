use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0, u32 as percent},
    combinator::{map, value},
    sequence::{delimited, preceded, separated_pair},
    IResult, Parser,
};

use crate::error::PlannerError;
use crate::models::Gas;

/// Mix as written, in whole percent before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Percentages {
    o2: u32,
    he: u32,
}

/// Parse shorthand gas notation into a validated [`Gas`].
///
/// Accepted forms (case-insensitive, optional space after the prefix):
/// `air`, `oxygen`, `o2`, `nitrox32`, `ean32`, `nx32`, `trimix 18/45`,
/// `tx18/45`, `heliox21`, `hx21`.
pub fn parse_gas(input: &str) -> Result<Gas, PlannerError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PlannerError::InvalidGasNotation {
            position: 0,
            message: "empty gas notation".to_string(),
        });
    }

    match parse_mix(input) {
        Ok((remaining, mix)) => {
            let remaining = remaining.trim();
            if !remaining.is_empty() {
                return Err(PlannerError::InvalidGasNotation {
                    position: (input.len() - remaining.len()) as u32,
                    message: format!("unexpected characters: '{}'", remaining),
                });
            }
            if mix.o2 > 100 || mix.he > 100 {
                return Err(PlannerError::InvalidGas(format!(
                    "percentages must not exceed 100 ({}/{})",
                    mix.o2, mix.he
                )));
            }
            Gas::new(f64::from(mix.o2) / 100.0, f64::from(mix.he) / 100.0)
        }
        Err(e) => Err(PlannerError::InvalidGasNotation {
            position: 0,
            message: format!("unrecognised gas '{}': {:?}", input, e),
        }),
    }
}

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_mix(input: &str) -> IResult<&str, Percentages> {
    alt((parse_trimix, parse_heliox, parse_nitrox, parse_oxygen, parse_air)).parse(input)
}

fn parse_air(input: &str) -> IResult<&str, Percentages> {
    value(Percentages { o2: 21, he: 0 }, tag_no_case("air")).parse(input)
}

fn parse_oxygen(input: &str) -> IResult<&str, Percentages> {
    value(
        Percentages { o2: 100, he: 0 },
        alt((tag_no_case("oxygen"), tag_no_case("o2"))),
    )
    .parse(input)
}

fn parse_nitrox(input: &str) -> IResult<&str, Percentages> {
    map(
        preceded(
            alt((tag_no_case("nitrox"), tag_no_case("ean"), tag_no_case("nx"))),
            ws(percent),
        ),
        |o2| Percentages { o2, he: 0 },
    )
    .parse(input)
}

fn parse_trimix(input: &str) -> IResult<&str, Percentages> {
    map(
        preceded(
            alt((tag_no_case("trimix"), tag_no_case("tx"))),
            ws(separated_pair(percent, ws(char('/')), percent)),
        ),
        |(o2, he)| Percentages { o2, he },
    )
    .parse(input)
}

fn parse_heliox(input: &str) -> IResult<&str, Percentages> {
    map(
        preceded(alt((tag_no_case("heliox"), tag_no_case("hx"))), ws(percent)),
        |o2: u32| Percentages {
            o2,
            he: 100u32.saturating_sub(o2),
        },
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mix(notation: &str, o2: f64, he: f64) {
        let gas = parse_gas(notation).unwrap_or_else(|e| panic!("{notation}: {e}"));
        assert!(
            (gas.o2_fraction - o2).abs() < 1e-9,
            "{notation}: O2 {} != {o2}",
            gas.o2_fraction
        );
        assert!(
            (gas.he_fraction - he).abs() < 1e-9,
            "{notation}: He {} != {he}",
            gas.he_fraction
        );
    }

    #[test]
    fn test_parse_named_gases() {
        assert_mix("air", 0.21, 0.0);
        assert_mix("AIR", 0.21, 0.0);
        assert_mix("oxygen", 1.0, 0.0);
        assert_mix("O2", 1.0, 0.0);
    }

    #[test]
    fn test_parse_nitrox() {
        assert_mix("nitrox32", 0.32, 0.0);
        assert_mix("EAN36", 0.36, 0.0);
        assert_mix("nx 50", 0.50, 0.0);
        assert_mix("  ean32  ", 0.32, 0.0);
    }

    #[test]
    fn test_parse_trimix() {
        assert_mix("trimix 18/45", 0.18, 0.45);
        assert_mix("TX10/70", 0.10, 0.70);
        assert_mix("tx 21 / 35", 0.21, 0.35);
    }

    #[test]
    fn test_parse_heliox() {
        assert_mix("heliox21", 0.21, 0.79);
        assert_mix("hx 16", 0.16, 0.84);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            parse_gas("   "),
            Err(PlannerError::InvalidGasNotation {
                position: 0,
                message: "empty gas notation".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_unknown_notation() {
        assert!(matches!(
            parse_gas("argon"),
            Err(PlannerError::InvalidGasNotation { position: 0, .. })
        ));
        assert!(matches!(
            parse_gas("ean"),
            Err(PlannerError::InvalidGasNotation { .. })
        ));
    }

    #[test]
    fn test_parse_trailing_characters() {
        assert!(matches!(
            parse_gas("ean32 extra"),
            Err(PlannerError::InvalidGasNotation { position: 6, .. })
        ));
    }

    #[test]
    fn test_parse_out_of_range_mix() {
        assert!(matches!(parse_gas("ean0"), Err(PlannerError::InvalidGas(_))));
        assert!(matches!(parse_gas("ean120"), Err(PlannerError::InvalidGas(_))));
        assert!(matches!(
            parse_gas("tx30/80"),
            Err(PlannerError::InvalidGas(_))
        ));
    }
}
