/// Recorded path command.
///
/// `Context2d` accumulates these between `begin_path` and `stroke`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Closed axis-aligned rectangle subpath.
    Rect(f32, f32, f32, f32),
}

/// Current path state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Flattens the path into stroke segments `(x1, y1, x2, y2)`.
    ///
    /// A `LineTo` with no preceding current point is treated as a move,
    /// matching canvas behavior of starting a new subpath.
    pub fn segments(&self) -> Vec<(f32, f32, f32, f32)> {
        let mut segs = Vec::new();
        let mut current: Option<(f32, f32)> = None;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(x, y) => current = Some((x, y)),
                PathCmd::LineTo(x, y) => {
                    if let Some((cx, cy)) = current {
                        segs.push((cx, cy, x, y));
                    }
                    current = Some((x, y));
                }
                PathCmd::Rect(x, y, w, h) => {
                    segs.push((x, y, x + w, y));
                    segs.push((x + w, y, x + w, y + h));
                    segs.push((x + w, y + h, x, y + h));
                    segs.push((x, y + h, x, y));
                    current = Some((x, y));
                }
            }
        }
        segs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_then_line_yields_one_segment() {
        let mut p = Path::new();
        p.push(PathCmd::MoveTo(1.0, 2.0));
        p.push(PathCmd::LineTo(3.0, 4.0));
        assert_eq!(p.segments(), vec![(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn line_without_current_point_starts_subpath() {
        let mut p = Path::new();
        p.push(PathCmd::LineTo(5.0, 5.0));
        p.push(PathCmd::LineTo(6.0, 6.0));
        assert_eq!(p.segments(), vec![(5.0, 5.0, 6.0, 6.0)]);
    }

    #[test]
    fn rect_flattens_to_four_edges() {
        let mut p = Path::new();
        p.push(PathCmd::Rect(0.0, 0.0, 10.0, 5.0));
        let segs = p.segments();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], (0.0, 0.0, 10.0, 0.0));
        assert_eq!(segs[3], (0.0, 5.0, 0.0, 0.0));
    }
}
