use crate::constants::{
    DECOMPOSITION_S, FINAL_RESULT_S, HORIZONTAL_ANALYSIS_S, SETUP_S, VERTICAL_ANALYSIS_S,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scene {
    Setup,
    Decomposition,
    VerticalAnalysis,
    HorizontalAnalysis,
    FinalResult,
}

/// What part of the flight a scene animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Motion {
    None,
    VerticalOnly,
    HorizontalOnly,
    Full,
}

impl Scene {
    pub(crate) const ALL: [Scene; 5] = [
        Scene::Setup,
        Scene::Decomposition,
        Scene::VerticalAnalysis,
        Scene::HorizontalAnalysis,
        Scene::FinalResult,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Scene::Setup => 0,
            Scene::Decomposition => 1,
            Scene::VerticalAnalysis => 2,
            Scene::HorizontalAnalysis => 3,
            Scene::FinalResult => 4,
        }
    }

    pub(crate) fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub(crate) fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub(crate) fn duration_s(self) -> f32 {
        match self {
            Scene::Setup => SETUP_S,
            Scene::Decomposition => DECOMPOSITION_S,
            Scene::VerticalAnalysis => VERTICAL_ANALYSIS_S,
            Scene::HorizontalAnalysis => HORIZONTAL_ANALYSIS_S,
            Scene::FinalResult => FINAL_RESULT_S,
        }
    }

    pub(crate) fn motion(self) -> Motion {
        match self {
            Scene::Setup | Scene::Decomposition => Motion::None,
            Scene::VerticalAnalysis => Motion::VerticalOnly,
            Scene::HorizontalAnalysis => Motion::HorizontalOnly,
            Scene::FinalResult => Motion::Full,
        }
    }

    pub(crate) fn is_last(self) -> bool {
        self == Scene::FinalResult
    }
}

pub(crate) struct SceneClock {
    elapsed_s: f32,
    duration_s: f32,
}

impl SceneClock {
    pub(crate) fn new(duration_s: f32) -> Self {
        Self {
            elapsed_s: 0.0,
            duration_s: duration_s.max(f32::EPSILON),
        }
    }

    pub(crate) fn for_scene(scene: Scene) -> Self {
        Self::new(scene.duration_s())
    }

    pub(crate) fn tick(&mut self, dt: f32) {
        self.elapsed_s = (self.elapsed_s + dt.max(0.0)).min(self.duration_s);
    }

    /// Fraction of the scene played, in `[0, 1]`.
    pub(crate) fn progress(&self) -> f32 {
        (self.elapsed_s / self.duration_s).clamp(0.0, 1.0)
    }

    pub(crate) fn is_done(&self) -> bool {
        self.elapsed_s >= self.duration_s
    }
}

/// Animation progress stretched over a sub-interval of the scene, so
/// successive elements can be staggered.
pub(crate) fn staged(progress: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if progress >= end { 1.0 } else { 0.0 };
    }
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_run_in_narrative_order() {
        let mut scene = Scene::Setup;
        let mut seen = vec![scene];
        while !scene.is_last() {
            scene = scene.next();
            seen.push(scene);
        }
        assert_eq!(seen, Scene::ALL);
    }

    #[test]
    fn navigation_saturates_at_ends() {
        assert_eq!(Scene::FinalResult.next(), Scene::FinalResult);
        assert_eq!(Scene::Setup.previous(), Scene::Setup);
        assert_eq!(Scene::VerticalAnalysis.previous(), Scene::Decomposition);
    }

    #[test]
    fn only_analysis_scenes_animate_flight() {
        assert_eq!(Scene::Setup.motion(), Motion::None);
        assert_eq!(Scene::VerticalAnalysis.motion(), Motion::VerticalOnly);
        assert_eq!(Scene::HorizontalAnalysis.motion(), Motion::HorizontalOnly);
        assert_eq!(Scene::FinalResult.motion(), Motion::Full);
    }

    #[test]
    fn clock_progress_is_clamped() {
        let mut clock = SceneClock::new(2.0);
        assert_eq!(clock.progress(), 0.0);
        clock.tick(0.5);
        assert_eq!(clock.progress(), 0.25);
        assert!(!clock.is_done());
        clock.tick(-1.0);
        assert_eq!(clock.progress(), 0.25);
        clock.tick(10.0);
        assert_eq!(clock.progress(), 1.0);
        assert!(clock.is_done());
    }

    #[test]
    fn staged_progress_windows() {
        assert_eq!(staged(0.2, 0.5, 1.0), 0.0);
        assert_eq!(staged(0.75, 0.5, 1.0), 0.5);
        assert_eq!(staged(1.0, 0.5, 1.0), 1.0);
        assert_eq!(staged(0.5, 0.5, 0.5), 1.0);
    }
}
