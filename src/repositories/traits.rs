//! Common repository traits
//!
//! This module defines generic interfaces for the local cache operations.

use super::CacheError;

/// Trait for storing new entities
///
/// # Type Parameters
/// * `Entity` - Type of the stored entity (already carrying its ID)
pub trait Create<Entity> {
    /// Stores a new entity ahead of the existing ones
    ///
    /// # Arguments
    /// * `data` - Entity to store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Stored entity
    /// * `Err(CacheError)` - Error during the write
    async fn create(&self, data: &Entity) -> Result<Entity, CacheError>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `str`)
pub trait Read<Entity, Id: ?Sized> {
    /// Reads an entity by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(CacheError)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, CacheError>;
}

/// Trait for reading the whole collection
pub trait ReadAll<Entity> {
    /// Reads every stored entity, newest first
    ///
    /// # Returns
    /// * `Ok(Some(Vec<Entity>))` - Collection present (can be empty)
    /// * `Ok(None)` - Nothing was ever stored
    /// * `Err(CacheError)` - Error during reading or decoding
    async fn read_all(&self) -> Result<Option<Vec<Entity>>, CacheError>;
}

/// Trait for replacing existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `Id` - Type of the primary key
pub trait Update<Entity, Id: ?Sized> {
    /// Replaces the entity with the given primary key, leaving the others untouched
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Updated entity
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(CacheError)` - Error during the write
    async fn update(&self, id: &Id, data: &Entity) -> Result<Option<Entity>, CacheError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id: ?Sized> {
    /// Deletes the entity with the given primary key
    ///
    /// # Returns
    /// * `Ok(true)` - Exactly one entity removed
    /// * `Ok(false)` - No entity with that ID
    /// * `Err(CacheError)` - Error during the write
    async fn delete(&self, id: &Id) -> Result<bool, CacheError>;
}
