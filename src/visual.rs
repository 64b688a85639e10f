//! Publication plotting style, as matplotlib rc parameters.

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Named base style applied before the overrides below.
    pub base: String,
    /// Font type embedded in pdf and ps output; 42 is TrueType.
    pub font_type: u8,
    pub font_family: String,
    pub figure_dpi: u32,
    pub savefig_dpi: u32,
    pub figure_size: (f32, f32),
    pub font_size: f32,
    pub axes_label_size: f32,
    pub axes_title_size: f32,
    pub tick_label_size: f32,
    pub legend_font_size: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            base: "science".to_owned(),
            font_type: 42,
            font_family: "sans-serif".to_owned(),
            figure_dpi: 600,
            savefig_dpi: 600,
            figure_size: (10.0, 7.0),
            font_size: 13.0,
            axes_label_size: 17.0,
            axes_title_size: 17.0,
            tick_label_size: 13.0,
            legend_font_size: 13.0,
        }
    }
}

impl PlotStyle {
    /// `(key, value)` pairs in matplotlib's rcParams naming.
    pub fn rc_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pdf.fonttype", self.font_type.to_string()),
            ("ps.fonttype", self.font_type.to_string()),
            ("font.family", self.font_family.clone()),
            ("figure.dpi", self.figure_dpi.to_string()),
            ("savefig.dpi", self.savefig_dpi.to_string()),
            (
                "figure.figsize",
                format!("{}, {}", self.figure_size.0, self.figure_size.1),
            ),
            ("font.size", self.font_size.to_string()),
            ("axes.labelsize", self.axes_label_size.to_string()),
            ("axes.titlesize", self.axes_title_size.to_string()),
            ("xtick.labelsize", self.tick_label_size.to_string()),
            ("ytick.labelsize", self.tick_label_size.to_string()),
            ("legend.fontsize", self.legend_font_size.to_string()),
        ]
    }

    /// Renders the style as `matplotlibrc` file contents.
    pub fn to_rc(&self) -> String {
        let params: String = self
            .rc_params()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect();
        format!("# base style: {}\n{params}", self.base)
    }
}

/// The default plotting style.
pub fn style() -> PlotStyle {
    let style = PlotStyle::default();
    info!(base = %style.base, dpi = style.figure_dpi, "plot style");
    style
}

#[deprecated(note = "use `style` instead")]
pub fn set_plt_style() -> PlotStyle {
    style()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let s = style();
        assert_eq!(s.base, "science");
        assert_eq!(s.font_type, 42);
        assert_eq!(s.figure_dpi, 600);
        assert_eq!(s.figure_size, (10.0, 7.0));
        assert_eq!(s.axes_title_size, 17.0);
    }

    #[test]
    fn test_rc_rendering() {
        let rc = PlotStyle::default().to_rc();
        assert!(rc.starts_with("# base style: science\n"));
        assert!(rc.contains("pdf.fonttype: 42\n"));
        assert!(rc.contains("ps.fonttype: 42\n"));
        assert!(rc.contains("figure.figsize: 10, 7\n"));
        assert!(rc.contains("axes.labelsize: 17\n"));
        assert!(rc.contains("legend.fontsize: 13\n"));
        assert_eq!(rc.lines().count(), 13);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s: PlotStyle = serde_json::from_str(r#"{"figure_dpi": 300}"#).unwrap();
        assert_eq!(s.figure_dpi, 300);
        assert_eq!(s.savefig_dpi, 600);
        assert_eq!(s.font_family, "sans-serif");
    }

    #[test]
    #[allow(deprecated)]
    fn test_alias_forwards() {
        assert_eq!(set_plt_style(), style());
    }
}
