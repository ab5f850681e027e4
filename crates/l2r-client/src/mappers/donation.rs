//! Donation and quality check mappers

use l2r_core::{
    Coordinates, Donation, DonationId, DonationStatus, DomainError, Location, NewDonation,
    QualityCheck, Quantity, UserId,
};
use tracing::debug;

use super::decode_error;
use crate::models::{DonationCreateBody, DonationModel, LocationModel, QualityCheckBody};

/// Parse a wire status
///
/// Older deployments marked failed inspections `rejected`; that is read as
/// `cancelled`.
pub fn donation_status_from_wire(raw: &str) -> Result<DonationStatus, DomainError> {
    match raw {
        "rejected" => {
            debug!("Reading legacy 'rejected' status as cancelled");
            Ok(DonationStatus::Cancelled)
        }
        other => other.parse().map_err(|e| decode_error("status", e)),
    }
}

/// Convert a wire location, validating coordinates
pub fn location_from_wire(model: LocationModel) -> Result<Location, DomainError> {
    let coordinates = Coordinates::new(model.latitude, model.longitude)
        .map_err(|e| decode_error("location", e))?;
    let location = Location::new(coordinates);
    Ok(match model.address {
        Some(address) => location.with_address(address),
        None => location,
    })
}

impl From<&Location> for LocationModel {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
            address: location.address.clone(),
        }
    }
}

impl TryFrom<DonationModel> for Donation {
    type Error = DomainError;

    fn try_from(model: DonationModel) -> Result<Self, Self::Error> {
        Ok(Donation {
            quantity: Quantity::new(model.quantity).map_err(|e| decode_error("quantity", e))?,
            status: donation_status_from_wire(&model.status)?,
            location: location_from_wire(model.location)?,
            id: DonationId::new(model.id),
            donor_id: UserId::new(model.donor_id),
            donor_name: model.donor_name,
            food_type: model.food_type,
            description: model.description,
            expiry_date: model.expiry_date,
            image: model.image,
            created_at: model.created_at,
            volunteer_id: model.volunteer_id.map(UserId::new),
            volunteer_name: model.volunteer_name,
            receiver_id: model.receiver_id.map(UserId::new),
            distance_km: model.distance,
        })
    }
}

impl<'a> DonationCreateBody<'a> {
    pub fn from_new(donation: &'a NewDonation) -> Self {
        Self {
            food_type: &donation.food_type,
            quantity: donation.quantity.get(),
            description: donation.description.as_deref(),
            expiry_date: donation.expiry_date,
            location: LocationModel::from(&donation.location),
            image: donation.image.as_ref().map(l2r_core::ImageData::to_data_uri),
        }
    }
}

impl<'a> QualityCheckBody<'a> {
    pub fn from_check(check: &'a QualityCheck) -> Self {
        Self {
            donation_id: check.donation_id().as_str(),
            expiry_status: check.expiry(),
            packaging_status: check.packaging(),
            smell_status: check.smell(),
            overall_quality: check.overall(),
            notes: check.notes(),
        }
    }
}
