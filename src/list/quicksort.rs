/// In-place quicksort over `SimpleList`
///
/// Hoare partitioning driven purely by positions: every comparison and swap
/// goes through `get`/`swap`, which walk the chain from the first node. That
/// makes a sort O(n² log n) on average. Values move between nodes; the links
/// are never rewired.

use std::cmp::Ordering;

use super::error::ListResult;
use super::simple_list::SimpleList;

impl<T> SimpleList<T> {
    /// Sort ascending using the element ordering
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sort with a caller-supplied comparison.
    ///
    /// The comparison should be a total order; any comparison that reports
    /// `Equal` for a value against itself still terminates, with an
    /// unspecified order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }

        log::debug!("Quicksorting list of {} elements", self.len());
        if let Err(err) = self.quicksort(0, self.len() as isize - 1, &mut compare) {
            log::error!("Quicksort stopped early: {}", err);
        }
    }

    fn quicksort<F>(&mut self, low: isize, high: isize, compare: &mut F) -> ListResult<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut i = low;
        let mut j = high;
        // Position of the pivot value, followed through the swaps below
        let mut pivot = ((low + high) / 2) as usize;

        loop {
            while i < high && compare(self.get(i as usize)?, self.get(pivot)?) == Ordering::Less {
                i += 1;
            }
            while j > low && compare(self.get(j as usize)?, self.get(pivot)?) == Ordering::Greater {
                j -= 1;
            }

            if i <= j {
                self.swap(i as usize, j as usize)?;
                if pivot == i as usize {
                    pivot = j as usize;
                } else if pivot == j as usize {
                    pivot = i as usize;
                }
                i += 1;
                j -= 1;
            }

            if i > j {
                break;
            }
        }

        if low < j {
            self.quicksort(low, j, compare)?;
        }
        if i < high {
            self.quicksort(i, high, compare)?;
        }
        Ok(())
    }
}
