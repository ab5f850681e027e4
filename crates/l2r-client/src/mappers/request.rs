//! Food request mapper

use l2r_core::{
    DomainError, DonationId, FoodRequest, NewFoodRequest, Quantity, RequestId, RequestStatus,
    Urgency, UserId,
};

use super::{decode_error, location_from_wire};
use crate::models::{FoodRequestCreateBody, FoodRequestModel, LocationModel};

impl TryFrom<FoodRequestModel> for FoodRequest {
    type Error = DomainError;

    fn try_from(model: FoodRequestModel) -> Result<Self, Self::Error> {
        let urgency: Urgency = model
            .urgency
            .parse()
            .map_err(|e| decode_error("urgency", e))?;
        let status: RequestStatus = model
            .status
            .parse()
            .map_err(|e| decode_error("status", e))?;

        Ok(FoodRequest {
            quantity: Quantity::new(model.quantity).map_err(|e| decode_error("quantity", e))?,
            location: location_from_wire(model.location)?,
            id: RequestId::new(model.id),
            receiver_id: UserId::new(model.receiver_id),
            receiver_name: model.receiver_name,
            food_type: model.food_type,
            urgency,
            notes: model.notes,
            status,
            created_at: model.created_at,
            matched_donation_id: model.matched_donation_id.map(DonationId::new),
        })
    }
}

impl<'a> FoodRequestCreateBody<'a> {
    pub fn from_new(request: &'a NewFoodRequest) -> Self {
        Self {
            food_type: &request.food_type,
            quantity: request.quantity.get(),
            urgency: request.urgency,
            location: LocationModel::from(&request.location),
            notes: request.notes.as_deref(),
        }
    }
}
