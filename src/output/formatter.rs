//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::recommendation::CareerRecommendation;
use crate::output::report::{format_salary, match_tier, percent, MatchReport};
use colored::{Color, Colorize};
use std::path::Path;

const EMPTY_MESSAGE: &str = "No recommendations found";
/// Gap entries shown per list outside detailed mode.
const BRIEF_LIST_LEN: usize = 5;

pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport<'_>) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_tier_badge(&self, score: f64) -> String {
        let tier = match_tier(score);
        let color = if score >= 0.8 {
            Color::Green
        } else if score >= 0.6 {
            Color::BrightGreen
        } else if score >= 0.4 {
            Color::Yellow
        } else {
            Color::Red
        };

        if self.use_colors {
            format!("[{}]", tier.color(color).bold())
        } else {
            format!("[{}]", tier)
        }
    }

    fn format_list(&self, label: &str, items: &[String], color: Color) -> String {
        if items.is_empty() {
            return String::new();
        }
        let shown = if self.detailed {
            items.len()
        } else {
            items.len().min(BRIEF_LIST_LEN)
        };
        let mut line = format!(
            "   {} {}",
            self.colorize(label, Color::Cyan),
            self.colorize(&items[..shown].join(", "), color)
        );
        if shown < items.len() {
            line.push_str(&format!(" (+{} more)", items.len() - shown));
        }
        line.push('\n');
        line
    }

    fn format_recommendation(&self, rank: usize, rec: &CareerRecommendation<'_>) -> String {
        let career = rec.career;
        let mut output = self.format_header(
            &format!("{}. {} ({}%)", rank, career.title, percent(rec.match_score)),
            2,
        );

        output.push_str(&format!("   {}\n", self.format_tier_badge(rec.match_score)));
        output.push_str(&format!(
            "   Industry: {} | Level: {} | Outlook: {}{}\n",
            career.industry,
            career.experience_level,
            career.growth_outlook,
            if career.emerging_role { " | Emerging role" } else { "" }
        ));
        output.push_str(&format!(
            "   Salary: {} entry / {} mid / {} senior\n",
            format_salary(career.average_salary.entry),
            format_salary(career.average_salary.mid),
            format_salary(career.average_salary.senior)
        ));
        output.push_str(&format!(
            "   Time to ready: {}\n",
            self.colorize(rec.time_to_ready.label(), Color::Magenta)
        ));

        for reason in &rec.reasoning {
            output.push_str(&format!("   • {}\n", reason));
        }

        output.push_str(&self.format_list("Strengths:", &rec.skill_gap.strengths, Color::Green));
        output.push_str(&self.format_list("Missing:", &rec.skill_gap.missing, Color::Yellow));
        output.push_str(&self.format_list("To improve:", &rec.skill_gap.to_improve, Color::Yellow));
        output.push_str(&self.format_list("Courses:", &rec.recommended_actions.courses, Color::White));

        if self.detailed {
            let actions = &rec.recommended_actions;
            output.push_str(&self.format_list("Certifications:", &actions.certifications, Color::White));
            output.push_str(&self.format_list("Projects:", &actions.projects, Color::White));
            output.push_str(&self.format_list("Networking:", &actions.networking, Color::White));

            let s = &rec.scores;
            output.push_str(&format!(
                "   {} technical {}% | soft {}% | education {}% | experience {}% | interest {}% | growth {}%\n",
                self.colorize("Factors:", Color::Cyan),
                percent(s.technical),
                percent(s.soft),
                percent(s.education),
                percent(s.experience),
                percent(s.interest),
                percent(s.growth)
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport<'_>) -> Result<String> {
        let mut output = String::new();
        let meta = &report.metadata;

        output.push_str(&self.format_header(
            &format!("CAREER MATCHES FOR {}", meta.profile_name.to_uppercase()),
            1,
        ));
        output.push_str(&format!(
            "Generated: {} | Careers evaluated: {}\n",
            meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            meta.catalog_size
        ));

        if report.is_empty() {
            output.push_str(&format!("\n{}\n", self.colorize(EMPTY_MESSAGE, Color::Yellow)));
            return Ok(output);
        }

        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&self.format_recommendation(i + 1, rec));
        }

        if !self.detailed {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("Run with --detailed for the full action plan and factor breakdown.", Color::BrightBlack)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport<'_>) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_section(title: &str, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut section = format!("**{}**\n\n", title);
        for item in items {
            section.push_str(&format!("- {}\n", item));
        }
        section.push('\n');
        section
    }

    fn format_recommendation(rank: usize, rec: &CareerRecommendation<'_>) -> String {
        let career = rec.career;
        let mut output = format!(
            "## {}. {} ({}%, {})\n\n",
            rank,
            career.title,
            percent(rec.match_score),
            match_tier(rec.match_score)
        );

        output.push_str(&format!("{}\n\n", career.description));
        output.push_str("| Industry | Level | Outlook | Salary (entry / mid / senior) | Time to ready |\n");
        output.push_str("|----------|-------|---------|-------------------------------|---------------|\n");
        output.push_str(&format!(
            "| {} | {} | {}{} | {} / {} / {} | {} |\n\n",
            career.industry,
            career.experience_level,
            career.growth_outlook,
            if career.emerging_role { " (emerging)" } else { "" },
            format_salary(career.average_salary.entry),
            format_salary(career.average_salary.mid),
            format_salary(career.average_salary.senior),
            rec.time_to_ready
        ));

        output.push_str(&Self::bullet_section("Why this fits", &rec.reasoning));
        output.push_str(&Self::bullet_section("Strengths", &rec.skill_gap.strengths));
        output.push_str(&Self::bullet_section("Missing skills", &rec.skill_gap.missing));
        output.push_str(&Self::bullet_section("Skills to improve", &rec.skill_gap.to_improve));

        let actions = &rec.recommended_actions;
        output.push_str(&Self::bullet_section("Courses", &actions.courses));
        output.push_str(&Self::bullet_section("Certifications", &actions.certifications));
        output.push_str(&Self::bullet_section("Projects", &actions.projects));
        output.push_str(&Self::bullet_section("Networking", &actions.networking));

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport<'_>) -> Result<String> {
        let meta = &report.metadata;
        let mut output = format!("# Career Matches for {}\n\n", meta.profile_name);

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {} | **Careers evaluated:** {}\n\n",
                meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                meta.version,
                meta.catalog_size
            ));
        }

        if report.is_empty() {
            output.push_str(&format!("_{}_\n", EMPTY_MESSAGE));
            return Ok(output);
        }

        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&Self::format_recommendation(i + 1, rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport<'_>, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// File name derived from the profile file's stem, e.g. `alex_matches.json`.
pub fn suggest_filename(format: &OutputFormat, profile_file: &str, timestamp: bool) -> String {
    let stem = Path::new(profile_file)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "profile".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_matches{}.{}", stem, timestamp_suffix, extension)
}
