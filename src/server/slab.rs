/// Storage that hands out reusable integer keys, used to map poll tokens to connections.
/// Removed slots are reused before the storage grows.
pub struct Slab<T> {
    entries: Vec<Option<T>>,
    vacant: Vec<usize>,
    len: usize,
}

impl<T> Slab<T> {
    pub fn with_capacity(capacity: usize) -> Slab<T> {
        Slab { entries: Vec::with_capacity(capacity), vacant: vec![], len: 0 }
    }

    /// The key the next inserted element will get.
    pub fn vacant_key(&self) -> usize {
        self.vacant.last().copied().unwrap_or(self.entries.len())
    }

    /// Stores the element and returns its key.
    pub fn insert(&mut self, element: T) -> usize {
        self.len += 1;
        match self.vacant.pop() {
            Some(key) => {
                self.entries[key] = Some(element);
                key
            }
            None => {
                self.entries.push(Some(element));
                self.entries.len() - 1
            }
        }
    }

    pub fn get(&self, key: usize) -> Option<&T> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Removes the element with the given key, making the key available again.
    pub fn remove(&mut self, key: usize) -> Option<T> {
        let element = self.entries.get_mut(key)?.take()?;
        self.vacant.push(key);
        self.len -= 1;
        Some(element)
    }

    /// The number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
