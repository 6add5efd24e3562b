use crate::error::Result;
use crate::model::{RegionId, RegionInput};
use crate::store::AddressStore;
use tracing::debug;

/// Turns the user's region value into a region id.
///
/// Numeric input is used as-is without consulting the store; zero means no region. A name is looked
/// up against the country's reference data; `None` means nothing matched.
pub fn resolve_region<S: AddressStore>(
    store: &S,
    country_id: Option<&str>,
    input: &RegionInput,
) -> Result<Option<RegionId>> {
    match input {
        RegionInput::Id(id) => Ok(Some(*id).filter(|id| *id > 0)),
        RegionInput::Name(name) => {
            let Some(country_id) = country_id.filter(|c| !c.is_empty()) else {
                debug!(region = %name, "no country given, region left unresolved");
                return Ok(None);
            };
            let found = store
                .find_region(country_id, name)?
                .filter(|id| *id > 0);
            debug!(region = %name, country_id, ?found, "region lookup");
            Ok(found)
        }
    }
}
