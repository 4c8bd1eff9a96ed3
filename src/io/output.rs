//! Report writers: JSON for machines, markdown for docs, terminal for
//! humans.

use crate::pipeline::RiskReport;
use crate::risk::RiskCategory;
use clap::ValueEnum;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    top: Option<usize>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, top)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, top)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }

    fn write_summary(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "# Riskmap Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Functions |")?;
        writeln!(self.writer, "|----------|-----------|")?;
        writeln!(
            self.writer,
            "| Hidden Risk | {} |",
            summary.distribution.hidden_risk
        )?;
        writeln!(
            self.writer,
            "| Refactor Candidate | {} |",
            summary.distribution.refactor_candidate
        )?;
        writeln!(
            self.writer,
            "| Low Value | {} |",
            summary.distribution.low_value
        )?;
        writeln!(
            self.writer,
            "| Safe Zone | {} |",
            summary.distribution.safe_zone
        )?;
        writeln!(self.writer, "| Unscored | {} |", summary.functions_unscored)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Function | Category | Priority | Coverage | Data | Rationale |"
        )?;
        writeln!(
            self.writer,
            "|---|----------|----------|----------|----------|------|-----------|"
        )?;

        let limit = self.top.unwrap_or(report.recommendations.len());
        for (i, rec) in report.recommendations.iter().take(limit).enumerate() {
            let coverage = rec
                .coverage_ratio
                .map(|r| format!("{:.0}%", r * 100.0))
                .unwrap_or_else(|| "unmeasured".to_string());
            let quality = match rec.data_quality {
                crate::core::DataQuality::Measured => "measured",
                crate::core::DataQuality::Incomplete => "incomplete",
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.3} | {} | {} | {} |",
                i + 1,
                rec.function_id,
                rec.category.display_name(),
                rec.priority_score,
                coverage,
                quality,
                rec.rationale.join("; ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_unscored(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        if report.unscored.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Unscored Functions")?;
        writeln!(self.writer)?;
        for entry in &report.unscored {
            writeln!(self.writer, "- {}: {}", entry.function_id, entry.reason)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_recommendations(report)?;
        self.write_unscored(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

fn category_label(category: RiskCategory) -> ColoredString {
    match category {
        RiskCategory::HiddenRisk => category.display_name().red().bold(),
        RiskCategory::RefactorCandidate => category.display_name().yellow(),
        RiskCategory::LowValue => category.display_name().blue(),
        RiskCategory::SafeZone => category.display_name().green(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "{}", "TEST RISK ANALYSIS".bold())?;
        writeln!(
            self.writer,
            "{} functions classified, {} unscored, {} with incomplete coverage data",
            summary.functions_analyzed, summary.functions_unscored, summary.incomplete_data
        )?;
        writeln!(self.writer)?;

        let limit = self.top.unwrap_or(report.recommendations.len());
        for (i, rec) in report.recommendations.iter().take(limit).enumerate() {
            let coverage = rec
                .coverage_ratio
                .map(|r| format!("{:.0}%", r * 100.0))
                .unwrap_or_else(|| "unmeasured".to_string());

            writeln!(
                self.writer,
                "{:>3}. {} [{}] priority {:.3}",
                i + 1,
                rec.function_id,
                category_label(rec.category),
                rec.priority_score
            )?;
            writeln!(
                self.writer,
                "     complexity {} | {} loc | {} deps | coverage {}",
                rec.cyclomatic_complexity, rec.loc, rec.dependency_count, coverage
            )?;
            for reason in &rec.rationale {
                writeln!(self.writer, "     - {reason}")?;
            }
        }

        if !report.unscored.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "UNSCORED".bold())?;
            for entry in &report.unscored {
                writeln!(self.writer, "  {}: {}", entry.function_id, entry.reason)?;
            }
        }

        Ok(())
    }
}
