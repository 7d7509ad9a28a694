use std::io::Write;

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::catalog::{Industry, PricingTier};
use crate::chart::{self, ChartBar};
use crate::core::{Estimate, EstimateInputs, TierFees};
use crate::formatting::{
    format_count, format_payback, format_roi, ColoredFormatter, FormattingConfig, OutputFormatter,
};
use crate::insights::{self, Insight, Tone};
use crate::session::Session;
use crate::validation::{Field, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryInfo {
    pub key: &'static str,
    pub name: &'static str,
}

/// Everything a writer needs to render one estimate.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub industry: IndustryInfo,
    pub tier: PricingTier,
    pub fees: TierFees,
    pub inputs: EstimateInputs,
    pub estimate: Estimate,
    pub errors: FieldErrors,
    pub insights: Vec<Insight>,
    pub chart: Vec<ChartBar>,
}

impl Report {
    pub fn from_session(session: &Session) -> Self {
        Self::with_timestamp(session, Utc::now())
    }

    pub fn with_timestamp(session: &Session, generated_at: DateTime<Utc>) -> Self {
        let industry: Industry = session.industry();
        let estimate = session.estimate().clone();
        Self {
            generated_at,
            industry: IndustryInfo {
                key: industry.key(),
                name: industry.display_name(),
            },
            tier: session.tier().pricing(),
            fees: session.fees(),
            inputs: session.inputs().clone(),
            insights: insights::derive(&estimate),
            chart: chart::monthly_comparison(&estimate),
            errors: session.errors().clone(),
            estimate,
        }
    }

    /// Label/value pairs of the monthly comparison.
    fn monthly_rows(&self, fmt: &FormattingConfig) -> Vec<(&'static str, String)> {
        let e = &self.estimate;
        vec![
            ("Current staff cost", fmt.money(e.human_monthly_cost)),
            ("Platform monthly fee", fmt.money(e.ai_total_monthly_cost)),
            ("Setup fee (amortized / 12)", fmt.money(e.ai_setup_fee_monthly)),
            ("Platform cost incl. setup", fmt.money(e.ai_total_cost_with_setup)),
            ("Staff cost savings", fmt.money(e.cost_savings)),
            ("Recovered revenue", fmt.money(e.potential_revenue)),
            ("Net benefit", fmt.money(e.net_benefit)),
            ("ROI", format_roi(e.roi)),
            ("Payback", format_payback(e.payback, fmt.language)),
        ]
    }

    fn volume_rows(&self) -> Vec<(&'static str, String)> {
        let e = &self.estimate;
        vec![
            ("Days per month", format_count(e.days_per_month, 0)),
            ("Messages received", format_count(e.total_received, 0)),
            ("Conversations handled", format_count(e.total_messages_handled, 0)),
            ("Missed messages", format_count(e.total_missed_messages, 0)),
            ("Missed sales opportunities", format_count(e.sales_missed_messages, 1)),
            ("Customers lost", format_count(e.converted_patients_lost, 1)),
            (
                "Automation coverage",
                format!("{}%", format_count(e.automation_percentage, 1)),
            ),
        ]
    }

    fn annual_rows(&self, fmt: &FormattingConfig) -> Vec<(&'static str, String)> {
        let e = &self.estimate;
        vec![
            ("Yearly staff savings", fmt.money(e.yearly_cost_savings)),
            ("Yearly recovered revenue", fmt.money(e.yearly_potential_revenue)),
            ("Yearly net benefit", fmt.money(e.yearly_net_benefit)),
            ("First-year net return", fmt.money(e.first_year_net_return)),
            (
                "First-year revenue vs platform cost",
                fmt.money(e.first_year_revenue_vs_ai_cost),
            ),
        ]
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# Chat Automation ROI Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Industry: {}", report.industry.name)?;
        writeln!(
            self.writer,
            "- Plan: {} ({} setup, {} per month)",
            report.tier.name,
            self.formatting.money(report.fees.setup_fee),
            self.formatting.money(report.fees.monthly_fee)
        )?;
        writeln!(self.writer, "- Days open: {}", report.inputs.days_open)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_errors(&mut self, errors: &FieldErrors) -> anyhow::Result<()> {
        if errors.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Input Warnings")?;
        writeln!(self.writer)?;
        for (field, error) in errors.iter() {
            writeln!(self.writer, "- **{}**: {}. {}", field.label(), error, field.hint())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, title: &str, rows: &[(&str, String)]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|------:|")?;
        for (label, value) in rows {
            writeln!(self.writer, "| {} | {} |", label, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, insights: &[Insight]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Key Takeaways")?;
        writeln!(self.writer)?;
        for insight in insights {
            writeln!(self.writer, "- {}", insight.message(&self.formatting))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_errors(&report.errors)?;
        let monthly = report.monthly_rows(&self.formatting);
        self.write_table("Monthly Comparison", &monthly)?;
        self.write_table("Message Volume", &report.volume_rows())?;
        let annual = report.annual_rows(&self.formatting);
        self.write_table("Annual Projection", &annual)?;
        self.write_insights(&report.insights)?;
        Ok(())
    }
}

const CHART_WIDTH: usize = 40;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
        }
    }

    fn use_color(&self) -> bool {
        self.formatter.config().color.should_use_color()
    }

    fn table(&self, rows: &[(&str, String)]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !self.use_color() {
            table.force_no_tty();
        }
        for (label, value) in rows {
            let mut value_cell = Cell::new(value).set_alignment(CellAlignment::Right);
            if value.starts_with('-') {
                value_cell = value_cell.fg(Color::Red);
            }
            table.add_row(vec![Cell::new(label), value_cell]);
        }
        table
    }

    fn print_header(&mut self, report: &Report) -> anyhow::Result<()> {
        let fmt = self.formatter.config().clone();
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Chat Automation ROI Estimate")
        )?;
        writeln!(self.writer, "{}", self.formatter.dim("============================"))?;
        writeln!(
            self.writer,
            "  {} {} | {} | {}",
            self.formatter.emoji("🏥", "*"),
            self.formatter.bold(report.industry.name),
            report.tier.name,
            report.inputs.days_open
        )?;
        writeln!(
            self.writer,
            "  Setup fee {}, monthly fee {}",
            fmt.money(report.fees.setup_fee),
            fmt.money(report.fees.monthly_fee)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_errors(&mut self, errors: &FieldErrors) -> anyhow::Result<()> {
        for (field, error) in errors.iter() {
            let line = format!(
                "{} {}: {}. {}",
                self.formatter.emoji("⚠️", "!"),
                field.label(),
                error,
                field.hint()
            );
            writeln!(self.writer, "{}", self.formatter.warning(&line))?;
        }
        if errors.has_errors() {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .dim("Some inputs are invalid; results use the values as entered.")
            )?;
        }
        if !errors.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn print_section(&mut self, title: &str, rows: &[(&str, String)]) -> anyhow::Result<()> {
        let table = self.table(rows);
        writeln!(self.writer, "{}", self.formatter.bold(title))?;
        writeln!(self.writer, "{}", table)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_chart(&mut self, bars: &[ChartBar]) -> anyhow::Result<()> {
        let fmt = self.formatter.config().clone();
        writeln!(self.writer, "{}", self.formatter.bold("Monthly cost comparison"))?;
        let width = bars.iter().map(|bar| bar.kind.label().len()).max().unwrap_or(0);
        for (bar, cells) in chart::text_bars(bars, CHART_WIDTH) {
            let cells = match bar.kind {
                chart::BarKind::HumanCost => self.formatter.warning(&cells),
                chart::BarKind::PlatformCost => self.formatter.header(&cells),
                chart::BarKind::NetBenefit => self.formatter.success(&cells),
            };
            writeln!(
                self.writer,
                "  {:<width$}  {} {}",
                bar.kind.label(),
                cells,
                fmt.money(bar.value),
                width = width
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_insights(&mut self, insights: &[Insight]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("💡", ">"),
            self.formatter.bold("Key takeaways")
        )?;
        for insight in insights {
            let message = insight.message(self.formatter.config());
            let message = match insight.tone() {
                Tone::Positive => self.formatter.success(&message),
                Tone::Negative => self.formatter.error(&message),
                Tone::Neutral => message,
            };
            writeln!(self.writer, "  - {}", message)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let fmt = self.formatter.config().clone();
        self.print_header(report)?;
        self.print_errors(&report.errors)?;
        self.print_section("Monthly comparison", &report.monthly_rows(&fmt))?;
        self.print_section("Message volume", &report.volume_rows())?;
        self.print_section("Annual projection", &report.annual_rows(&fmt))?;
        self.print_chart(&report.chart)?;
        self.print_insights(&report.insights)?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    destination: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, formatting)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, formatting)),
    }
}

/// Fields whose error would block a submission, in display order.
pub fn blocking_fields(errors: &FieldErrors) -> Vec<Field> {
    errors
        .iter()
        .map(|(field, _)| field)
        .filter(|field| field.gates_submission())
        .collect()
}
