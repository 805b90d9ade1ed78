//! The tabbed HTML report document

use crate::category_chart::CategoryChart;
use crate::flow_chart::FlowChart;
use crate::proportion_chart::ProportionChart;
use crate::traits::ChartBuilder;
use expense_common::{AggregateRow, ReportPeriod, Result};
use expense_config::ReportConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Rendered report: a self-contained HTML string and its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub file_name: String,
    pub html: String,
}

impl ReportDocument {
    /// Write the document into `dir`, returning the file path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.html)?;
        info!("Wrote report to {}", path.display());
        Ok(path)
    }
}

/// Renders every chart panel into one [`ReportDocument`].
pub struct ReportRenderer {
    stylesheet_url: Option<String>,
    chart_library_url: String,
    charts: Vec<Box<dyn ChartBuilder>>,
}

impl ReportRenderer {
    /// Renderer with the flow, proportion and category panels, in that order
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            stylesheet_url: config.stylesheet_url.clone(),
            chart_library_url: config.chart_library_url.clone(),
            charts: vec![
                Box::new(FlowChart::new()),
                Box::new(ProportionChart::new()),
                Box::new(CategoryChart::new()),
            ],
        }
    }

    pub fn charts(&self) -> impl Iterator<Item = &dyn ChartBuilder> {
        self.charts.iter().map(|chart| chart.as_ref())
    }

    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn render(&self, period: ReportPeriod, rows: &[AggregateRow]) -> Result<ReportDocument> {
        let title = period.report_title();

        let mut buttons = String::new();
        let mut panels = String::new();
        let mut plots = String::new();

        for chart in &self.charts {
            let figure = chart.build(rows)?;
            let id = chart.name();
            debug!("Built {} panel", id);

            buttons.push_str(&format!(
                "<button class=\"tablinks\" onclick=\"openTab(event, '{id}')\">{label}</button>\n",
                label = escape_html(chart.description()),
            ));
            panels.push_str(&format!(
                "<div id=\"{id}\" class=\"tabcontent\"><div id=\"{id}-chart\" class=\"chart\"></div></div>\n"
            ));
            plots.push_str(&format!(
                "Plotly.newPlot('{id}-chart', {});\n",
                figure.to_script_json()?
            ));
        }

        let stylesheet = self
            .stylesheet_url
            .as_deref()
            .map(|url| format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape_html(url)))
            .unwrap_or_default();

        let html = format!(
            "<!DOCTYPE html>\n\
             <html><head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             {stylesheet}\
             <script src=\"{library}\"></script>\n\
             <style>.tabcontent{{display:none}}.tablinks.active{{font-weight:bold}}</style>\n\
             </head><body>\n\
             <div class=\"tab\">\n{buttons}</div>\n\
             {panels}\
             <script>\n{TAB_SCRIPT}{plots}\
             document.getElementsByClassName('tablinks')[0].click();\n\
             </script>\n\
             </body></html>\n",
            title = escape_html(&title),
            library = escape_html(&self.chart_library_url),
        );

        info!("Rendered {} ({} bytes)", title, html.len());
        Ok(ReportDocument {
            file_name: format!("{}.html", title),
            title,
            html,
        })
    }
}

const TAB_SCRIPT: &str = "function openTab(evt, tabName) {
  var i, tabcontent, tablinks, chart;
  tabcontent = document.getElementsByClassName('tabcontent');
  for (i = 0; i < tabcontent.length; i++) {
    tabcontent[i].style.display = 'none';
  }
  tablinks = document.getElementsByClassName('tablinks');
  for (i = 0; i < tablinks.length; i++) {
    tablinks[i].className = tablinks[i].className.replace(' active', '');
  }
  document.getElementById(tabName).style.display = 'block';
  evt.currentTarget.className += ' active';
  chart = document.getElementById(tabName + '-chart');
  if (chart && window.Plotly) {
    Plotly.Plots.resize(chart);
  }
}
";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
