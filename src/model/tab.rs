/// The fixed set of screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    Process,
    Measure,
    Analyze,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Upload, Tab::Process, Tab::Measure, Tab::Analyze];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Upload => "upload",
            Tab::Process => "process",
            Tab::Measure => "measure",
            Tab::Analyze => "analyze",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Upload => "Upload Image",
            Tab::Process => "Cloud Removal",
            Tab::Measure => "Land Measurement",
            Tab::Analyze => "Analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_upload() {
        assert_eq!(Tab::default(), Tab::Upload);
    }

    #[test]
    fn ids_and_labels_are_distinct() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
