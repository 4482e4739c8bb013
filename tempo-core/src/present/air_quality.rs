//! Air-quality classification: a fixed five-row table over the API's
//! coarse 1..=5 severity index.

use thiserror::Error;

/// The index fell outside the 1..=5 scale the table is defined for. A
/// well-formed API response never produces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("air quality index {0} is outside the 1..=5 scale")]
pub struct InvalidAirQualityIndex(pub u8);

/// Severity color tag, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

impl SeverityColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
        }
    }
}

/// Display row for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQualityInfo {
    pub label: &'static str,
    pub color: SeverityColor,
    pub guidance: &'static str,
}

const LEVELS: [AirQualityInfo; 5] = [
    AirQualityInfo {
        label: "Boa",
        color: SeverityColor::Green,
        guidance: "Qualidade do ar ideal para atividades ao ar livre.",
    },
    AirQualityInfo {
        label: "Moderada",
        color: SeverityColor::Yellow,
        guidance: "Grupos sensíveis podem ter sintomas respiratórios.",
    },
    AirQualityInfo {
        label: "Ruim",
        color: SeverityColor::Orange,
        guidance: "Pessoas sensíveis devem evitar atividades ao ar livre.",
    },
    AirQualityInfo {
        label: "Muito Ruim",
        color: SeverityColor::Red,
        guidance: "Evite atividades ao ar livre prolongadas.",
    },
    AirQualityInfo {
        label: "Péssima",
        color: SeverityColor::Purple,
        guidance: "Evite qualquer atividade ao ar livre.",
    },
];

/// Look up the display row for a severity index.
pub fn classify(index: u8) -> Result<AirQualityInfo, InvalidAirQualityIndex> {
    match index {
        1..=5 => Ok(LEVELS[usize::from(index - 1)]),
        other => Err(InvalidAirQualityIndex(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_index_is_good() {
        let info = classify(1).expect("in range");
        assert_eq!(info.label, "Boa");
        assert_eq!(info.color, SeverityColor::Green);
    }

    #[test]
    fn highest_index_is_worst() {
        let info = classify(5).expect("in range");
        assert_eq!(info.label, "Péssima");
        assert_eq!(info.color, SeverityColor::Purple);
    }

    #[test]
    fn severity_strictly_increases_over_the_scale() {
        let colors: Vec<_> = (1..=5).map(|i| classify(i).expect("in range").color).collect();
        assert!(colors.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn out_of_range_indices_fail() {
        assert_eq!(classify(0).unwrap_err(), InvalidAirQualityIndex(0));
        assert_eq!(classify(6).unwrap_err(), InvalidAirQualityIndex(6));
    }

    #[test]
    fn every_row_has_guidance() {
        for index in 1..=5 {
            assert!(!classify(index).expect("in range").guidance.is_empty());
        }
    }
}
