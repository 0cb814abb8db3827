//! Device service
//!
//! Device lifecycle (add, deactivate) plus the cross-aggregate queries:
//! devices per room and devices grouped by functionality.

use std::{fmt, sync::Arc};

use domain::entities::Device;
use domain::factories::DeviceFactory;
use domain::value_objects::{DeviceId, DeviceModel, DeviceName, RoomId};
use indexmap::IndexMap;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ActuatorRepository, DeviceRepository, RoomRepository, SensorRepository},
};

/// Service for device management and device queries
pub struct DeviceService {
    rooms: Arc<dyn RoomRepository>,
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
    actuators: Arc<dyn ActuatorRepository>,
    factory: Arc<dyn DeviceFactory>,
}

impl fmt::Debug for DeviceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceService").finish_non_exhaustive()
    }
}

impl DeviceService {
    /// Create a new device service
    #[must_use]
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        devices: Arc<dyn DeviceRepository>,
        sensors: Arc<dyn SensorRepository>,
        actuators: Arc<dyn ActuatorRepository>,
        factory: Arc<dyn DeviceFactory>,
    ) -> Self {
        Self {
            rooms,
            devices,
            sensors,
            actuators,
            factory,
        }
    }

    /// Add a device to an existing room
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] when the room does not exist;
    /// the device store is not touched in that case.
    #[instrument(skip(self, name, model), fields(device_name = %name))]
    pub async fn add_device(
        &self,
        name: DeviceName,
        model: DeviceModel,
        room_id: RoomId,
    ) -> Result<Device, ApplicationError> {
        if !self.rooms.exists(&room_id).await? {
            return Err(ApplicationError::not_found("room", room_id));
        }

        let device = self.factory.create_device(name, model, room_id);
        self.devices.save(&device).await?;

        info!(device_id = %device.id, "Device added");
        Ok(device)
    }

    /// Deactivate a device
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] for an unknown device and
    /// [`ApplicationError::DeviceInactive`] when it is already inactive.
    #[instrument(skip(self))]
    pub async fn deactivate_device(&self, id: &DeviceId) -> Result<Device, ApplicationError> {
        let Some(mut device) = self.devices.find_by_id(id).await? else {
            return Err(ApplicationError::not_found("device", id));
        };

        if !device.deactivate() {
            return Err(ApplicationError::DeviceInactive(id.to_string()));
        }

        if !self.devices.update(&device).await? {
            return Err(ApplicationError::Persistence(
                "stored device disappeared during update".to_string(),
            ));
        }

        info!(device_id = %device.id, "Device deactivated");
        Ok(device)
    }

    /// A device by its identifier
    #[instrument(skip(self))]
    pub async fn get_device(&self, id: &DeviceId) -> Result<Option<Device>, ApplicationError> {
        self.devices.find_by_id(id).await
    }

    /// Devices in a room, in insertion order
    ///
    /// An unknown room yields an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn list_devices_in_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Vec<Device>, ApplicationError> {
        if !self.rooms.exists(room_id).await? {
            debug!(%room_id, "Room not present, returning empty device list");
            return Ok(Vec::new());
        }
        self.devices.find_by_room(room_id).await
    }

    /// Devices grouped by the functionality their sensors and actuators
    /// provide
    ///
    /// Keys appear in first-encounter order across all sensors followed by
    /// all actuators; each group lists its devices in encounter order with
    /// duplicates removed. Devices are resolved directly from the device
    /// store, so a device whose room no longer resolves is still listed.
    #[instrument(skip(self))]
    pub async fn list_devices_by_functionality(
        &self,
    ) -> Result<IndexMap<String, Vec<Device>>, ApplicationError> {
        let mut groups: IndexMap<String, Vec<DeviceId>> = IndexMap::new();

        for sensor in self.sensors.find_all().await? {
            let entry = groups
                .entry(sensor.sensor_type.as_str().to_string())
                .or_default();
            if !entry.contains(&sensor.device_id) {
                entry.push(sensor.device_id);
            }
        }
        for actuator in self.actuators.find_all().await? {
            let entry = groups
                .entry(actuator.actuator_type.as_str().to_string())
                .or_default();
            if !entry.contains(&actuator.device_id) {
                entry.push(actuator.device_id);
            }
        }

        let mut result: IndexMap<String, Vec<Device>> = IndexMap::with_capacity(groups.len());
        for (type_name, device_ids) in groups {
            let mut resolved = Vec::with_capacity(device_ids.len());
            for device_id in device_ids {
                match self.devices.find_by_id(&device_id).await? {
                    Some(device) => resolved.push(device),
                    None => {
                        warn!(%device_id, %type_name, "Sensor or actuator references a missing device");
                    }
                }
            }
            result.insert(type_name, resolved);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use domain::entities::{Actuator, Sensor};
    use domain::factories::DefaultDeviceFactory;
    use domain::value_objects::{
        ActuatorName, ActuatorSettings, ActuatorTypeId, SensorName, SensorTypeId,
    };

    use super::*;
    use crate::ports::{
        MockActuatorRepository, MockDeviceRepository, MockRoomRepository, MockSensorRepository,
    };

    struct Mocks {
        rooms: MockRoomRepository,
        devices: MockDeviceRepository,
        sensors: MockSensorRepository,
        actuators: MockActuatorRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                rooms: MockRoomRepository::new(),
                devices: MockDeviceRepository::new(),
                sensors: MockSensorRepository::new(),
                actuators: MockActuatorRepository::new(),
            }
        }

        fn into_service(self) -> DeviceService {
            DeviceService::new(
                Arc::new(self.rooms),
                Arc::new(self.devices),
                Arc::new(self.sensors),
                Arc::new(self.actuators),
                Arc::new(DefaultDeviceFactory),
            )
        }
    }

    fn sample_device(room_id: RoomId) -> Device {
        Device::new(
            DeviceName::new("Thermostat").unwrap(),
            DeviceModel::new("T-100").unwrap(),
            room_id,
        )
    }

    fn sensor_on(device_id: DeviceId, sensor_type: SensorTypeId) -> Sensor {
        Sensor::new(SensorName::new("sensor").unwrap(), sensor_type, device_id)
    }

    fn switch_actuator_on(device_id: DeviceId) -> Actuator {
        Actuator::new(
            ActuatorName::new("switch").unwrap(),
            ActuatorTypeId::SwitchActuator,
            ActuatorSettings::None,
            device_id,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn add_device_to_existing_room_succeeds() {
        let room_id = RoomId::new();
        let mut mocks = Mocks::new();
        mocks.rooms.expect_exists().times(1).returning(|_| Ok(true));
        mocks.devices.expect_save().times(1).returning(|_| Ok(()));

        let device = mocks
            .into_service()
            .add_device(
                DeviceName::new("Meter").unwrap(),
                DeviceModel::new("GPM-1").unwrap(),
                room_id,
            )
            .await
            .unwrap();

        assert!(device.is_active());
        assert_eq!(device.room_id, room_id);
    }

    #[tokio::test]
    async fn add_device_to_unknown_room_fails_without_saving() {
        let mut mocks = Mocks::new();
        mocks.rooms.expect_exists().times(1).returning(|_| Ok(false));
        mocks.devices.expect_save().times(0);

        let result = mocks
            .into_service()
            .add_device(
                DeviceName::new("Meter").unwrap(),
                DeviceModel::new("GPM-1").unwrap(),
                RoomId::new(),
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn deactivate_device_transitions_and_updates() {
        let device = sample_device(RoomId::new());
        let id = device.id;

        let mut mocks = Mocks::new();
        mocks
            .devices
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(device.clone())));
        mocks.devices.expect_update().times(1).returning(|_| Ok(true));

        let updated = mocks.into_service().deactivate_device(&id).await.unwrap();

        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn deactivate_unknown_device_is_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .devices
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = mocks.into_service().deactivate_device(&DeviceId::new()).await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn deactivate_inactive_device_fails_without_updating() {
        let mut device = sample_device(RoomId::new());
        device.deactivate();
        let id = device.id;

        let mut mocks = Mocks::new();
        mocks
            .devices
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(device.clone())));
        mocks.devices.expect_update().times(0);

        let result = mocks.into_service().deactivate_device(&id).await;

        assert!(matches!(result, Err(ApplicationError::DeviceInactive(_))));
    }

    #[tokio::test]
    async fn list_devices_in_unknown_room_is_empty() {
        let mut mocks = Mocks::new();
        mocks.rooms.expect_exists().times(1).returning(|_| Ok(false));
        mocks.devices.expect_find_by_room().times(0);

        let listed = mocks
            .into_service()
            .list_devices_in_room(&RoomId::new())
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn by_functionality_groups_in_first_encounter_order() {
        let room_id = RoomId::new();
        let thermostat = sample_device(room_id);
        let meter = sample_device(room_id);
        let thermostat_id = thermostat.id;
        let meter_id = meter.id;

        let sensors = vec![
            sensor_on(thermostat_id, SensorTypeId::TemperatureSensor),
            sensor_on(meter_id, SensorTypeId::PowerConsumptionSensor),
            // Second temperature sensor on the same device: no duplicate entry
            sensor_on(thermostat_id, SensorTypeId::TemperatureSensor),
        ];
        let actuators = vec![switch_actuator_on(meter_id)];

        let mut mocks = Mocks::new();
        mocks
            .sensors
            .expect_find_all()
            .times(1)
            .returning(move || Ok(sensors.clone()));
        mocks
            .actuators
            .expect_find_all()
            .times(1)
            .returning(move || Ok(actuators.clone()));
        let devices = vec![thermostat.clone(), meter.clone()];
        mocks.devices.expect_find_by_id().returning(move |id| {
            Ok(devices.iter().find(|d| d.id == *id).cloned())
        });

        let grouped = mocks
            .into_service()
            .list_devices_by_functionality()
            .await
            .unwrap();

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["TemperatureSensor", "PowerConsumptionSensor", "SwitchActuator"]
        );
        assert_eq!(grouped["TemperatureSensor"].len(), 1);
        assert_eq!(grouped["TemperatureSensor"][0].id, thermostat_id);
        assert_eq!(grouped["SwitchActuator"][0].id, meter_id);
    }

    #[tokio::test]
    async fn by_functionality_with_no_sensors_or_actuators_is_empty() {
        let mut mocks = Mocks::new();
        mocks
            .sensors
            .expect_find_all()
            .times(1)
            .returning(|| Ok(Vec::new()));
        mocks
            .actuators
            .expect_find_all()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let grouped = mocks
            .into_service()
            .list_devices_by_functionality()
            .await
            .unwrap();

        assert!(grouped.is_empty());
    }

    #[tokio::test]
    async fn by_functionality_keeps_group_when_device_is_missing() {
        let ghost_id = DeviceId::new();
        let sensors = vec![sensor_on(ghost_id, SensorTypeId::HumiditySensor)];

        let mut mocks = Mocks::new();
        mocks
            .sensors
            .expect_find_all()
            .times(1)
            .returning(move || Ok(sensors.clone()));
        mocks
            .actuators
            .expect_find_all()
            .times(1)
            .returning(|| Ok(Vec::new()));
        mocks
            .devices
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let grouped = mocks
            .into_service()
            .list_devices_by_functionality()
            .await
            .unwrap();

        assert!(grouped.contains_key("HumiditySensor"));
        assert!(grouped["HumiditySensor"].is_empty());
    }
}
