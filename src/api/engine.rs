use tracing::debug;

use crate::core::{Bounds, ChartLayout, LayoutOptions, Series, compute_layout};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipContent, TooltipController, TooltipState};
use crate::render::{RenderFrame, RenderStyle, Renderer, build_render_frame};

use super::{ChartEngineConfig, EngineSnapshot};

/// Main facade consumed by host applications.
///
/// Owns the current series, its layout, and the tooltip state of one
/// rendering session. Every successful data change bumps the data revision,
/// which also drops any tooltip selected against the previous data.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    style: RenderStyle,
    series: Option<Series>,
    layout: Option<ChartLayout>,
    tooltip: TooltipController,
    revision: u64,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            series: None,
            layout: None,
            tooltip: TooltipController::new(config.tooltip_size, config.resolved_bounds()),
            revision: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    /// Replaces the plotted series.
    ///
    /// On error the previous series, layout and tooltip are kept untouched.
    pub fn set_series(&mut self, series: Series) -> ChartResult<()> {
        let options = self.layout_options_for(&series);
        let layout = compute_layout(&series, options, self.config.dimensions)?;
        self.series = Some(series);
        self.layout = Some(layout);
        self.bump_revision();
        Ok(())
    }

    /// Switches chart variant, re-laying out the current series if any.
    pub fn set_layout_options(&mut self, options: LayoutOptions) -> ChartResult<()> {
        if let Some(series) = &self.series {
            let layout = compute_layout(series, options, self.config.dimensions)?;
            self.layout = Some(layout);
            self.bump_revision();
        }
        self.config.layout_options = Some(options);
        Ok(())
    }

    pub fn clear_series(&mut self) {
        if self.series.is_none() {
            return;
        }
        self.series = None;
        self.layout = None;
        self.bump_revision();
    }

    /// Updates the rendered bounding box used for tooltip placement.
    ///
    /// An open tooltip is re-placed against the new bounds.
    pub fn set_bounds(&mut self, bounds: Bounds) -> ChartResult<()> {
        bounds.validate()?;
        self.config.bounds = Some(bounds);
        self.tooltip.set_bounds(bounds);
        if let Some(index) = self.tooltip.state().map(|state| state.index) {
            self.select_point(index)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Selects the point whose click target contains `(x, y)`.
    ///
    /// Clicks outside every target leave the tooltip as it is.
    pub fn click(&mut self, x: f64, y: f64) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        let index = layout.hit_test(x, y)?;
        let point = layout.point(index)?;
        self.tooltip.select(point);
        Some(index)
    }

    pub fn select_point(&mut self, index: usize) -> ChartResult<()> {
        let Some(layout) = self.layout.as_ref() else {
            return Err(ChartError::InsufficientData("no series loaded".to_owned()));
        };
        let point = layout.point(index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "point index {index} out of range for {} points",
                layout.len()
            ))
        })?;
        self.tooltip.select(point);
        Ok(())
    }

    pub fn close_tooltip(&mut self) {
        self.tooltip.close();
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.state()
    }

    #[must_use]
    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        self.tooltip.state().map(TooltipState::content)
    }

    #[must_use]
    pub fn tooltip_controller(&self) -> &TooltipController {
        &self.tooltip
    }

    /// Scene for the current layout and tooltip; `None` before any series is set.
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        let layout = self.layout.as_ref()?;
        Some(build_render_frame(layout, self.tooltip.state(), &self.style))
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self
            .build_render_frame()
            .ok_or_else(|| ChartError::InsufficientData("no series loaded".to_owned()))?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            revision: self.revision,
            layout: self.layout.clone(),
            tooltip: self.tooltip.state().cloned(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Configured variant when it can draw `series`, else the default for its kind.
    fn layout_options_for(&self, series: &Series) -> LayoutOptions {
        let kind = series.kind();
        self.config
            .layout_options
            .filter(|options| options.supports(kind))
            .unwrap_or_else(|| LayoutOptions::default_for(kind))
    }

    fn bump_revision(&mut self) {
        self.revision += 1;
        self.tooltip.sync_revision(self.revision);
        debug!(revision = self.revision, "chart data revision");
    }
}
