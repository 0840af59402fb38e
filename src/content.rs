//! Pure mapping from UI state to the static block shown for each tab.
//!
//! Every figure displayed by the shell lives here as a constant. The views
//! turn a [`Content`] into widgets and never invent text of their own.

use crate::model::{Preview, PreviewId, Tab, PLACEHOLDER_URL};

pub const APP_TITLE: &str = "LandSense AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Preview(PreviewId),
    Remote(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub text: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPanel {
    pub drop_hint: &'static str,
    pub button_label: &'static str,
    pub formats_hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessPanel {
    pub original_title: &'static str,
    pub original: Option<ImageSource>,
    pub processed_title: &'static str,
    pub processed: ImageSource,
    pub action: ActionButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurePanel {
    pub image: ImageSource,
    pub card_title: &'static str,
    pub readings: &'static [&'static str],
    pub actions: &'static [ActionButton],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzePanel {
    pub results_title: &'static str,
    pub metrics: &'static [Metric],
    pub history_title: &'static str,
    pub recommendations_title: &'static str,
    pub recommendations: &'static [Recommendation],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Upload(UploadPanel),
    Process(ProcessPanel),
    Measure(MeasurePanel),
    Analyze(AnalyzePanel),
}

const UPLOAD: UploadPanel = UploadPanel {
    drop_hint: "Drop an image here",
    button_label: "Select Satellite Image",
    formats_hint: "Supported formats: JPEG, PNG, TIFF",
};

const APPLY_CLOUD_REMOVAL: ActionButton = ActionButton {
    label: "Apply Cloud Removal",
    accent: Accent::Green,
};

const MEASUREMENTS: &[&str] = &[
    "Total Area: 245.3 hectares",
    "Perimeter: 2.3 km",
    "Land Type: Agricultural",
];

const MEASURE_ACTIONS: &[ActionButton] = &[
    ActionButton {
        label: "Draw Area",
        accent: Accent::Blue,
    },
    ActionButton {
        label: "Auto Detect Boundaries",
        accent: Accent::Purple,
    },
];

const METRICS: &[Metric] = &[
    Metric {
        title: "Vegetation Index",
        value: "0.76",
        accent: Accent::Blue,
    },
    Metric {
        title: "Land Usage",
        value: "Agricultural",
        accent: Accent::Green,
    },
    Metric {
        title: "Soil Quality",
        value: "High",
        accent: Accent::Purple,
    },
];

const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        text: "Optimal for crop rotation in next season",
        accent: Accent::Green,
    },
    Recommendation {
        text: "Consider irrigation system upgrade",
        accent: Accent::Yellow,
    },
    Recommendation {
        text: "Soil enrichment recommended",
        accent: Accent::Blue,
    },
];

pub fn render(tab: Tab, preview: Option<&Preview>) -> Content {
    match tab {
        Tab::Upload => Content::Upload(UPLOAD),
        Tab::Process => Content::Process(ProcessPanel {
            original_title: "Original Image",
            original: preview.map(|preview| ImageSource::Preview(preview.id())),
            processed_title: "Processed Image",
            processed: ImageSource::Remote(PLACEHOLDER_URL),
            action: APPLY_CLOUD_REMOVAL,
        }),
        Tab::Measure => Content::Measure(MeasurePanel {
            image: ImageSource::Remote(PLACEHOLDER_URL),
            card_title: "Measurements",
            readings: MEASUREMENTS,
            actions: MEASURE_ACTIONS,
        }),
        Tab::Analyze => Content::Analyze(AnalyzePanel {
            results_title: "Land Analysis Results",
            metrics: METRICS,
            history_title: "Historical Data",
            recommendations_title: "Recommendations",
            recommendations: RECOMMENDATIONS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PickedFile, PreviewSlot};

    fn slot_with_preview() -> PreviewSlot {
        let mut slot = PreviewSlot::default();
        slot.replace(PickedFile {
            name: "scene.png".to_string(),
            bytes: vec![1, 2, 3],
        });
        slot
    }

    #[test]
    fn upload_ignores_preview() {
        let slot = slot_with_preview();
        assert_eq!(
            render(Tab::Upload, slot.current()),
            render(Tab::Upload, None)
        );
    }

    #[test]
    fn upload_carries_picker_and_drop_text() {
        let Content::Upload(panel) = render(Tab::Upload, None) else {
            panic!("expected upload content");
        };
        assert_eq!(panel.drop_hint, "Drop an image here");
        assert_eq!(panel.button_label, "Select Satellite Image");
        assert_eq!(panel.formats_hint, "Supported formats: JPEG, PNG, TIFF");
    }

    #[test]
    fn process_shows_preview_left_and_placeholder_right() {
        let slot = slot_with_preview();
        let preview = slot.current().expect("preview should be present");

        let Content::Process(panel) = render(Tab::Process, Some(preview)) else {
            panic!("expected process content");
        };
        assert_eq!(panel.original, Some(ImageSource::Preview(preview.id())));
        assert_eq!(panel.processed, ImageSource::Remote(PLACEHOLDER_URL));
    }

    #[test]
    fn process_without_preview_keeps_placeholder() {
        let Content::Process(panel) = render(Tab::Process, None) else {
            panic!("expected process content");
        };
        assert_eq!(panel.original, None);
        assert_eq!(panel.processed, ImageSource::Remote(PLACEHOLDER_URL));
    }

    #[test]
    fn measure_lists_fixed_readings() {
        let Content::Measure(panel) = render(Tab::Measure, None) else {
            panic!("expected measure content");
        };
        assert_eq!(panel.readings[0], "Total Area: 245.3 hectares");
        assert_eq!(panel.readings[1], "Perimeter: 2.3 km");
        assert_eq!(panel.readings[2], "Land Type: Agricultural");
        assert_eq!(panel.actions.len(), 2);
    }

    #[test]
    fn analyze_lists_three_metrics_and_recommendations() {
        let Content::Analyze(panel) = render(Tab::Analyze, None) else {
            panic!("expected analyze content");
        };
        let values: Vec<_> = panel.metrics.iter().map(|metric| metric.value).collect();
        assert_eq!(values, ["0.76", "Agricultural", "High"]);
        assert_eq!(panel.recommendations.len(), 3);
    }

    #[test]
    fn rendering_is_repeatable() {
        let slot = slot_with_preview();
        for tab in Tab::ALL {
            let first = format!("{:?}", render(tab, slot.current()));
            let second = format!("{:?}", render(tab, slot.current()));
            assert_eq!(first, second);
        }
    }
}
