//! Text and JSON rendering of a reconstructed structure.

use std::fmt;
use colored::Colorize;
use serde_json::json;
use serde_json::Value;

use rt_structure::HelixId;
use rt_structure::SecondaryStructure;


fn helix_name(ss: &SecondaryStructure, id: HelixId) -> String {
    ss.helix(id).map_or_else(|| format!("#{}", id.0), |h| h.name().to_string())
}

/// Human-readable summary of a structure.
pub struct TextReport<'a>(pub &'a SecondaryStructure);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ss = self.0;
        if let Some(name) = ss.name().or(ss.rna().name()) {
            writeln!(out, ">{}", name.bold())?;
        }
        writeln!(out, "{}", ss.rna().seq())?;
        writeln!(out, "{}", ss.bn().cyan())?;

        writeln!(out, "\n{} ({})", "Helices".bold(), ss.helices().len())?;
        for (k, h) in ss.helices().iter().enumerate() {
            let junctions: Vec<&str> = ss.junctions_of(HelixId(k)).iter().map(|j| j.name()).collect();
            writeln!(out, "  {:<5} {:<20} {:>3} bp  {}",
                h.name().green(),
                h.location().to_string(),
                h.length(),
                junctions.join(","))?;
        }

        writeln!(out, "\n{} ({})", "Junctions".bold(), ss.junctions().len())?;
        for j in ss.junctions() {
            let helices: Vec<String> = j.helices_linked().iter().map(|&h| helix_name(ss, h)).collect();
            writeln!(out, "  {:<5} {:<12} {:<28} {}",
                j.name().yellow(),
                format!("{:?}", j.junction_type()),
                j.location().to_string(),
                helices.join(","))?;
        }

        writeln!(out, "\n{} ({})", "Tertiary interactions".bold(), ss.tertiary_interactions().len())?;
        for bp in ss.tertiary_interactions() {
            writeln!(out, "  {}", bp.to_string().magenta())?;
        }
        Ok(())
    }
}

pub fn to_json(ss: &SecondaryStructure) -> Value {
    let helices: Vec<Value> = ss.helices().iter().enumerate().map(|(k, h)| json!({
        "name": h.name(),
        "location": h.location().to_string(),
        "ends": h.ends(),
        "length": h.length(),
        "pairs": h.pairs().iter().map(|bp| bp.to_string()).collect::<Vec<_>>(),
        "junctions": ss.junctions_of(HelixId(k)).iter().map(|j| j.name()).collect::<Vec<_>>(),
    })).collect();

    let junctions: Vec<Value> = ss.junctions().iter().map(|j| json!({
        "name": j.name(),
        "type": j.junction_type(),
        "location": j.location().to_string(),
        "length": j.length(),
        "helices": j.helices_linked().iter().map(|&h| helix_name(ss, h)).collect::<Vec<_>>(),
    })).collect();

    json!({
        "name": ss.name().or(ss.rna().name()),
        "source": ss.source(),
        "sequence": ss.rna().seq(),
        "bracket": ss.bn(),
        "helices": helices,
        "junctions": junctions,
        "tertiary": ss.tertiary_interactions().iter().map(|bp| bp.to_string()).collect::<Vec<_>>(),
    })
}
