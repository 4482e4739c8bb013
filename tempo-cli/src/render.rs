//! Terminal rendering of the derived dashboard model.

use std::fmt::Write;

use tempo_core::client::FetchError;
use tempo_core::present::{Dashboard, Overlay};

const MPS_TO_KMH: f64 = 3.6;

/// Render the full dashboard as a text block.
pub fn dashboard(d: &Dashboard) -> String {
    let mut out = String::new();

    let rain_marker = match d.background.overlay {
        Some(Overlay::Rain) => "  ☔",
        None => "",
    };

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} — {}° {}",
        d.current.city,
        d.current.temperature_c.round() as i64,
        d.current.description
    );
    let _ = writeln!(out, "  [{}]{rain_marker}", d.background.gradient);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Sensação: {}°C   Umidade: {}%   Vento: {} km/h   Tempo: {}",
        d.current.feels_like_c.round() as i64,
        d.current.humidity_pct,
        (d.current.wind_speed_mps * MPS_TO_KMH).round() as i64,
        d.current.condition
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  Sol e Lua");
    let _ = writeln!(out, "    Nascer do Sol: {}", d.sunrise);
    let _ = writeln!(out, "    Pôr do Sol: {}", d.sunset);
    let _ = writeln!(out, "    Fase da Lua: {} {}", d.moon.glyph(), d.moon.name());

    if let Some(air) = &d.air_quality {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Qualidade do Ar");
        let _ = writeln!(out, "    ({}) {}", air.info.color.as_str(), air.info.label);
        let _ = writeln!(out, "    {}", air.info.guidance);
        let _ = writeln!(
            out,
            "    PM2.5: {:.1} µg/m³   PM10: {:.1} µg/m³",
            air.pollutants.pm2_5, air.pollutants.pm10
        );
    }

    if !d.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Próximos Dias");
        for (label, day) in &d.daily {
            // "terça-feira" renders as "terça".
            let short = label.split('-').next().unwrap_or(label);
            let _ = writeln!(
                out,
                "    {:<10} {}°/{}°   ☔ {}%   {}",
                short,
                day.temp_max_c.round() as i64,
                day.temp_min_c.round() as i64,
                (day.precipitation_probability * 100.0).round() as i64,
                day.description
            );
        }
    }

    out
}

/// One-line error banner. The previously rendered dashboard stays valid;
/// this is printed alongside it, not instead of it.
pub fn error_banner(err: &anyhow::Error) -> String {
    let message = match err.downcast_ref::<FetchError>() {
        Some(FetchError::CityNotFound(_)) => "Cidade não encontrada".to_owned(),
        _ => format!("Erro ao buscar dados: {err:#}"),
    };

    format!("\n  ⚠ {message}\n")
}
