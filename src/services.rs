use serde::Serialize;

/// The fixed set of offerings shown in the grid and accepted by the quote form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Service {
    #[serde(rename = "Air Freight")]
    AirFreight,
    #[serde(rename = "Sea Freight")]
    SeaFreight,
    #[serde(rename = "Land Freight")]
    LandFreight,
    #[serde(rename = "Door to Door")]
    DoorToDoor,
    #[serde(rename = "Warehouse Storage")]
    WarehouseStorage,
    #[serde(rename = "Air Charter")]
    AirCharter,
    #[serde(rename = "Procurement")]
    Procurement,
    #[serde(rename = "Home Moving")]
    HomeMoving,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::AirFreight,
        Service::SeaFreight,
        Service::LandFreight,
        Service::DoorToDoor,
        Service::WarehouseStorage,
        Service::AirCharter,
        Service::Procurement,
        Service::HomeMoving,
    ];

    /// Stable value used by the form select and the submitted payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Service::AirFreight => "Air Freight",
            Service::SeaFreight => "Sea Freight",
            Service::LandFreight => "Land Freight",
            Service::DoorToDoor => "Door to Door",
            Service::WarehouseStorage => "Warehouse Storage",
            Service::AirCharter => "Air Charter",
            Service::Procurement => "Procurement",
            Service::HomeMoving => "Home Moving",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.wire_name() == name.trim())
    }

    fn namespace(self) -> &'static str {
        match self {
            Service::AirFreight => "services.airFreight",
            Service::SeaFreight => "services.seaFreight",
            Service::LandFreight => "services.landFreight",
            Service::DoorToDoor => "services.doorToDoor",
            Service::WarehouseStorage => "services.warehouseStorage",
            Service::AirCharter => "services.airCharter",
            Service::Procurement => "services.procurement",
            Service::HomeMoving => "services.homeMoving",
        }
    }

    /// Translation key for a field of this service, e.g. `key("tagline")`.
    pub fn key(self, field: &str) -> String {
        format!("{}.{}", self.namespace(), field)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Service::AirFreight => "icon-plane",
            Service::SeaFreight => "icon-ship",
            Service::LandFreight => "icon-truck",
            Service::DoorToDoor => "icon-door",
            Service::WarehouseStorage => "icon-warehouse",
            Service::AirCharter => "icon-plane-takeoff",
            Service::Procurement => "icon-cart",
            Service::HomeMoving => "icon-home",
        }
    }

    /// Accent gradient class for the detail overlay header.
    pub fn accent(self) -> &'static str {
        match self {
            Service::AirFreight => "accent-sky",
            Service::SeaFreight => "accent-teal",
            Service::LandFreight => "accent-amber",
            Service::DoorToDoor => "accent-violet",
            Service::WarehouseStorage => "accent-slate",
            Service::AirCharter => "accent-rose",
            Service::Procurement => "accent-lime",
            Service::HomeMoving => "accent-emerald",
        }
    }

    /// One icon per entry of the `benefits` list, in order.
    pub fn benefit_icons(self) -> [&'static str; 3] {
        match self {
            Service::AirFreight => ["icon-clock", "icon-globe", "icon-shield"],
            Service::SeaFreight => ["icon-package", "icon-globe", "icon-shield"],
            Service::LandFreight => ["icon-clock", "icon-users", "icon-globe"],
            Service::DoorToDoor => ["icon-shield", "icon-clock", "icon-package"],
            Service::WarehouseStorage => ["icon-shield", "icon-package", "icon-globe"],
            Service::AirCharter => ["icon-clock", "icon-package", "icon-globe"],
            Service::Procurement => ["icon-users", "icon-shield", "icon-globe"],
            Service::HomeMoving => ["icon-shield", "icon-package", "icon-users"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_wire_names() {
        for service in Service::ALL {
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.wire_name()));
            assert_eq!(Service::from_wire_name(service.wire_name()), Some(service));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Service::from_wire_name("Dangerous Goods"), None);
        assert_eq!(Service::from_wire_name(""), None);
    }

    #[test]
    fn keys_live_under_service_namespace() {
        assert_eq!(Service::HomeMoving.key("tagline"), "services.homeMoving.tagline");
    }
}
