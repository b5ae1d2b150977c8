#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup) -> Self {
        Self { name, group }
    }

    pub fn small(name: &'static str) -> Self {
        Self::new(name, TestGroup::Small)
    }

    pub fn normal(name: &'static str) -> Self {
        Self::new(name, TestGroup::Normal)
    }

    pub fn large(name: &'static str) -> Self {
        Self::new(name, TestGroup::Large)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    /// Number of checks performed per iteration.
    pub fn size(&self) -> usize {
        self.group.size()
    }

    /// Values that satisfy every check in the benchmarks, so only the success path is measured.
    pub fn values(&self) -> Vec<u64> {
        (1..=self.size() as u64).collect()
    }

    /// Slots that are all non-nil.
    pub fn slots(&self) -> Vec<Option<u64>> {
        self.values().into_iter().map(Some).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub fn size(self) -> usize {
        match self {
            TestGroup::Small => 16,
            TestGroup::Normal => 1024,
            TestGroup::Large => 64 * 1024,
        }
    }

    /// Criterion sample count, lowered for the large batches.
    pub fn sample_size(self) -> usize {
        match self {
            TestGroup::Small => 100,
            TestGroup::Normal => 50,
            TestGroup::Large => 20,
        }
    }
}
