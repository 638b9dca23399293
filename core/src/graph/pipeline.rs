use super::Graph;

const STAGE_NAMES: [&str; 11] = [
    "Start",
    "Filtering",
    "Grouping",
    "Calculation",
    "Aggregation",
    "Core Analysis",
    "Metrics",
    "Categorization",
    "Statistics",
    "Visualization",
    "End",
];

/// Linear processing chain `0 - 1 - ... - n-1`, searched from both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    names: Vec<String>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(STAGE_NAMES.len())
    }
}

impl Pipeline {
    pub fn new(stages: usize) -> Self {
        let names = (0..stages)
            .map(|idx| match STAGE_NAMES.get(idx) {
                Some(name) => name.to_string(),
                None => format!("Stage {}", idx),
            })
            .collect();
        Self { names }
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, stage: usize) -> Option<&str> {
        self.names.get(stage).map(String::as_str)
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (0, self.names.len().saturating_sub(1))
    }
}

impl Graph for Pipeline {
    type Node = usize;

    fn neighbors(&self, stage: &usize) -> Vec<usize> {
        if !self.exists(stage) {
            return vec![];
        }

        let mut neighbors = Vec::with_capacity(2);
        if *stage > 0 {
            neighbors.push(stage - 1);
        }
        if stage + 1 < self.names.len() {
            neighbors.push(stage + 1);
        }
        neighbors
    }

    fn exists(&self, stage: &usize) -> bool {
        *stage < self.names.len()
    }

    fn node_count(&self) -> usize {
        self.names.len()
    }
}
