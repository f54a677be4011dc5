use util::{
  grid::Gridlike,
  pos::{Diff, Pos},
};

/// In-bounds king-move neighbors of `pos`: 8 in the interior, 5 along an edge,
/// 3 in a corner.
pub fn neighbors<'a, T, G>(grid: &'a G, pos: Pos) -> impl Iterator<Item = Pos> + 'a
where
  G: Gridlike<T>,
  T: 'a,
{
  Diff::KING_MOVES
    .into_iter()
    .filter_map(move |diff| pos.checked_add(diff))
    .filter(move |&neighbor| grid.in_bounds(neighbor))
}

pub fn are_neighbors(a: Pos, b: Pos) -> bool {
  a.is_adjacent(b)
}

pub fn is_position_in_path(path: &[Pos], pos: Pos) -> bool {
  path.contains(&pos)
}
