/// An entry that can be looked up by its identifier.
pub trait CatalogEntry {
  fn id(&self) -> &str;
}

/// Read-only, ordered collection of descriptors.
///
/// Cardinality is tiny (tens of entries at most), so lookups are a linear
/// scan over [`Catalog::entries`]. A miss is `None`, never an error.
pub trait Catalog: Send + Sync {
  type Entry: CatalogEntry;

  /// All entries, in catalog order.
  fn entries(&self) -> &[Self::Entry];

  /// Find an entry by id.
  fn get(&self, id: &str) -> Option<&Self::Entry> {
    self.entries().iter().find(|entry| entry.id() == id)
  }

  /// Check whether an id is present.
  fn contains(&self, id: &str) -> bool {
    self.get(id).is_some()
  }

  /// Ids of all entries, in catalog order.
  fn ids(&self) -> Vec<&str> {
    self.entries().iter().map(|entry| entry.id()).collect()
  }
}

/// Catalog backed by a `'static` slice.
#[derive(Debug)]
pub struct StaticCatalog<E: 'static> {
  entries: &'static [E],
}

impl<E: 'static> StaticCatalog<E> {
  /// Wrap a static slice of descriptors.
  pub const fn new(entries: &'static [E]) -> Self {
    Self { entries }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<E: 'static> Clone for StaticCatalog<E> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<E: 'static> Copy for StaticCatalog<E> {}

impl<E: CatalogEntry + Sync + 'static> Catalog for StaticCatalog<E> {
  type Entry = E;

  fn entries(&self) -> &[E] {
    self.entries
  }
}
