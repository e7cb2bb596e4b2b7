//! Function category registries.
//!
//! A category (e.g. "mortality") offers a closed, ordered set of
//! interchangeable [`IbmFunction`]s, at most one of which is selected.
//! Selection is stored by name, so a cloned registry's selection refers to
//! the clone's own copy of the function.

use indexmap::IndexMap;

use crate::error::CategoryError;
use crate::function::IbmFunction;

/// Functions available in one category plus the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSlot {
	available: IndexMap<String, IbmFunction>,
	selected: Option<String>,
}

impl FunctionSlot {
	pub fn available(&self) -> impl Iterator<Item = &IbmFunction> {
		self.available.values()
	}

	pub fn get(&self, name: &str) -> Option<&IbmFunction> {
		self.available.get(name)
	}

	pub fn selected(&self) -> Option<&IbmFunction> {
		self.selected.as_deref().and_then(|name| self.available.get(name))
	}

	pub fn selected_name(&self) -> Option<&str> {
		self.selected.as_deref()
	}
}

/// Ordered map from category name to its [`FunctionSlot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionCategoryRegistry {
	slots: IndexMap<String, FunctionSlot>,
}

impl FunctionCategoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a category and the functions it offers, in order.
	///
	/// Nothing is selected until [`Self::select`] is called.
	pub fn register_category(&mut self, category: impl Into<String>, functions: impl IntoIterator<Item = IbmFunction>) -> Result<(), CategoryError> {
		let category = category.into();
		if self.slots.contains_key(&category) {
			return Err(CategoryError::DuplicateCategory { category });
		}

		let mut available = IndexMap::new();
		for function in functions {
			let name = function.name().to_string();
			if available.contains_key(&name) {
				return Err(CategoryError::DuplicateFunction { category, name });
			}
			available.insert(name, function);
		}

		self.slots.insert(category, FunctionSlot { available, selected: None });
		Ok(())
	}

	/// Makes `name` the active function of `category`.
	///
	/// On failure the previous selection is kept.
	pub fn select(&mut self, category: &str, name: &str) -> Result<(), CategoryError> {
		let result = match self.slots.get_mut(category) {
			None => Err(CategoryError::UnknownCategory {
				category: category.to_string(),
			}),
			Some(slot) if !slot.available.contains_key(name) => Err(CategoryError::UnknownFunction {
				category: category.to_string(),
				name: name.to_string(),
			}),
			Some(slot) => {
				slot.selected = Some(name.to_string());
				Ok(())
			}
		};

		if let Err(e) = &result {
			tracing::warn!(category, function = name, error = %e, "function selection rejected");
		}
		result
	}

	/// Clears the selection of `category`.
	pub fn deselect(&mut self, category: &str) -> Result<(), CategoryError> {
		self.slot_mut(category)?.selected = None;
		Ok(())
	}

	pub fn selected(&self, category: &str) -> Option<&IbmFunction> {
		self.slots.get(category)?.selected()
	}

	pub fn selected_mut(&mut self, category: &str) -> Option<&mut IbmFunction> {
		let slot = self.slots.get_mut(category)?;
		let name = slot.selected.as_deref()?;
		slot.available.get_mut(name)
	}

	pub fn selected_name(&self, category: &str) -> Option<&str> {
		self.slots.get(category)?.selected_name()
	}

	pub fn slot(&self, category: &str) -> Result<&FunctionSlot, CategoryError> {
		self.slots.get(category).ok_or_else(|| CategoryError::UnknownCategory {
			category: category.to_string(),
		})
	}

	fn slot_mut(&mut self, category: &str) -> Result<&mut FunctionSlot, CategoryError> {
		self.slots.get_mut(category).ok_or_else(|| CategoryError::UnknownCategory {
			category: category.to_string(),
		})
	}

	/// Returns a registered function whether or not it is selected.
	pub fn function(&self, category: &str, name: &str) -> Result<&IbmFunction, CategoryError> {
		self.slot(category)?.available.get(name).ok_or_else(|| CategoryError::UnknownFunction {
			category: category.to_string(),
			name: name.to_string(),
		})
	}

	pub fn function_mut(&mut self, category: &str, name: &str) -> Result<&mut IbmFunction, CategoryError> {
		self.slot_mut(category)?.available.get_mut(name).ok_or_else(|| CategoryError::UnknownFunction {
			category: category.to_string(),
			name: name.to_string(),
		})
	}

	/// Category names in registration order.
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.slots.keys().map(String::as_str)
	}

	/// Function names of `category` in registration order.
	pub fn function_names(&self, category: &str) -> Result<impl Iterator<Item = &str>, CategoryError> {
		Ok(self.slot(category)?.available.keys().map(String::as_str))
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

#[cfg(test)]
mod tests;
