//! Native Wifi API (`wlanapi.dll`) backend.

use std::ffi::c_void;
use std::iter;
use std::mem::size_of;
use std::ptr;
use std::slice;

use pinbss_common::error::StatusCode;
use pinbss_common::network::adapter::{Adapter, AdapterId, AdapterState};
use pinbss_common::network::bss::VisibleNetwork;
use pinbss_common::network::mac::Bssid;
use pinbss_common::network::request::ConnectionRequest;
use pinbss_common::network::ssid::{MAX_SSID_LEN, Ssid};
use pinbss_common::system::WlanSubsystem;
use tracing::{debug, warn};
use windows::Win32::Foundation::{BOOL, ERROR_INVALID_DATA, ERROR_SUCCESS, HANDLE};
use windows::Win32::NetworkManagement::Ndis::{NDIS_OBJECT_HEADER, NDIS_OBJECT_TYPE_DEFAULT};
use windows::Win32::NetworkManagement::WiFi::{
    DOT11_BSSID_LIST, DOT11_BSSID_LIST_REVISION_1, DOT11_SSID, WLAN_BSS_LIST,
    WLAN_CONNECTION_PARAMETERS, WLAN_INTERFACE_INFO_LIST, WLAN_PROFILE_INFO_LIST, WlanCloseHandle,
    WlanConnect, WlanEnumInterfaces, WlanFreeMemory, WlanGetNetworkBssList, WlanGetProfile,
    WlanGetProfileList, WlanOpenHandle, WlanScan, dot11_BSS_type_infrastructure,
    wlan_connection_mode_profile,
};
use windows::core::{GUID, PCWSTR, PWSTR};

/// Client version 2 is the Vista+ API.
const CLIENT_VERSION: u32 = 2;

fn check(ret: u32) -> Result<(), StatusCode> {
    if ret == ERROR_SUCCESS.0 {
        Ok(())
    } else {
        Err(StatusCode(ret))
    }
}

fn guid(adapter: &AdapterId) -> GUID {
    GUID::from_u128(adapter.0)
}

/// Null-terminated UTF-16 copy of `s`.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(iter::once(0)).collect()
}

/// Reads a fixed-size, null-padded UTF-16 field.
fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

fn adapter_state(raw: i32) -> AdapterState {
    match raw {
        0 => AdapterState::NotReady,
        1 => AdapterState::Connected,
        2 => AdapterState::AdHocNetworkFormed,
        3 => AdapterState::Disconnecting,
        4 => AdapterState::Disconnected,
        5 => AdapterState::Associating,
        6 => AdapterState::Discovering,
        7 => AdapterState::Authenticating,
        _ => AdapterState::Unknown,
    }
}

/// Memory allocated by the subsystem, released with `WlanFreeMemory` on drop.
struct WlanBuffer<T> {
    ptr: *mut T,
}

impl<T> WlanBuffer<T> {
    /// # Safety
    /// `ptr` must be null or a block returned by the Native Wifi API that nothing else frees.
    unsafe fn from_raw(ptr: *mut T) -> Self {
        Self { ptr }
    }

    fn get(&self) -> Option<&T> {
        // SAFETY: non-null pointers come from the API and stay valid until drop.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> Drop for WlanBuffer<T> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            // SAFETY: allocated by the API, freed exactly once here.
            unsafe { WlanFreeMemory(self.ptr as *const c_void) };
        }
    }
}

/// An open Native Wifi client handle.
pub struct NativeWlan {
    handle: HANDLE,
}

impl NativeWlan {
    pub fn open() -> Result<Self, StatusCode> {
        let mut negotiated: u32 = 0;
        let mut handle = HANDLE::default();
        // SAFETY: both out-pointers are valid locals.
        check(unsafe { WlanOpenHandle(CLIENT_VERSION, None, &mut negotiated, &mut handle) })?;
        debug!("WLAN session opened (negotiated version {negotiated})");
        Ok(Self { handle })
    }
}

impl Drop for NativeWlan {
    fn drop(&mut self) {
        // SAFETY: the handle was opened in `open` and is closed only here.
        match check(unsafe { WlanCloseHandle(self.handle, None) }) {
            Ok(()) => debug!("WLAN session closed"),
            Err(code) => warn!("Closing the WLAN session failed: {code}"),
        }
    }
}

impl WlanSubsystem for NativeWlan {
    fn interfaces(&self) -> Result<Vec<Adapter>, StatusCode> {
        let mut raw: *mut WLAN_INTERFACE_INFO_LIST = ptr::null_mut();
        // SAFETY: `raw` receives an API allocation owned by the buffer below.
        check(unsafe { WlanEnumInterfaces(self.handle, None, &mut raw) })?;
        let buffer = unsafe { WlanBuffer::from_raw(raw) };
        let Some(list) = buffer.get() else {
            return Ok(Vec::new());
        };

        // SAFETY: the list holds `dwNumberOfItems` trailing entries.
        let infos = unsafe {
            slice::from_raw_parts(list.InterfaceInfo.as_ptr(), list.dwNumberOfItems as usize)
        };
        Ok(infos
            .iter()
            .map(|info| Adapter {
                id: AdapterId(info.InterfaceGuid.to_u128()),
                description: from_wide(&info.strInterfaceDescription),
                state: adapter_state(info.isState.0),
            })
            .collect())
    }

    fn trigger_scan(&self, adapter: &AdapterId) -> Result<(), StatusCode> {
        let guid = guid(adapter);
        // SAFETY: `guid` outlives the call.
        check(unsafe { WlanScan(self.handle, &guid, None, None, None) })
    }

    fn profile_names(&self, adapter: &AdapterId) -> Result<Vec<String>, StatusCode> {
        let guid = guid(adapter);
        let mut raw: *mut WLAN_PROFILE_INFO_LIST = ptr::null_mut();
        // SAFETY: `raw` receives an API allocation owned by the buffer below.
        check(unsafe { WlanGetProfileList(self.handle, &guid, None, &mut raw) })?;
        let buffer = unsafe { WlanBuffer::from_raw(raw) };
        let Some(list) = buffer.get() else {
            return Ok(Vec::new());
        };

        // SAFETY: the list holds `dwNumberOfItems` trailing entries.
        let infos = unsafe {
            slice::from_raw_parts(list.ProfileInfo.as_ptr(), list.dwNumberOfItems as usize)
        };
        Ok(infos
            .iter()
            .map(|info| from_wide(&info.strProfileName))
            .collect())
    }

    fn profile_xml(&self, adapter: &AdapterId, name: &str) -> Result<String, StatusCode> {
        let guid = guid(adapter);
        let name = wide(name);
        let mut xml = PWSTR::null();
        // SAFETY: `name` is null-terminated and `xml` receives an API allocation.
        check(unsafe {
            WlanGetProfile(
                self.handle,
                &guid,
                PCWSTR(name.as_ptr()),
                None,
                &mut xml,
                None,
                None,
            )
        })?;
        let _buffer = unsafe { WlanBuffer::from_raw(xml.0) };

        // SAFETY: the API returns a null-terminated string.
        unsafe { xml.to_string() }.map_err(|_| StatusCode(ERROR_INVALID_DATA.0))
    }

    fn bss_list(&self, adapter: &AdapterId) -> Result<Vec<VisibleNetwork>, StatusCode> {
        let guid = guid(adapter);
        let mut raw: *mut WLAN_BSS_LIST = ptr::null_mut();
        // SAFETY: `raw` receives an API allocation owned by the buffer below.
        check(unsafe {
            WlanGetNetworkBssList(
                self.handle,
                &guid,
                None,
                dot11_BSS_type_infrastructure,
                BOOL::from(false),
                None,
                &mut raw,
            )
        })?;
        let buffer = unsafe { WlanBuffer::from_raw(raw) };
        let Some(list) = buffer.get() else {
            return Ok(Vec::new());
        };

        // SAFETY: the list holds `dwNumberOfItems` trailing entries.
        let entries = unsafe {
            slice::from_raw_parts(list.wlanBssEntries.as_ptr(), list.dwNumberOfItems as usize)
        };
        Ok(entries
            .iter()
            .map(|entry| {
                let len = (entry.dot11Ssid.uSSIDLength as usize).min(MAX_SSID_LEN);
                VisibleNetwork {
                    ssid: Ssid::from_bytes(&entry.dot11Ssid.ucSSID[..len]),
                    bssid: Bssid::new(entry.dot11Bssid),
                    rssi: entry.lRssi,
                    frequency_khz: entry.ulChCenterFrequency,
                }
            })
            .collect())
    }

    fn connect(&self, adapter: &AdapterId, request: &ConnectionRequest) -> Result<(), StatusCode> {
        let guid = guid(adapter);
        let profile = wide(request.profile());

        let name = request.ssid().as_bytes();
        let mut ssid = DOT11_SSID {
            uSSIDLength: name.len() as u32,
            ..Default::default()
        };
        ssid.ucSSID[..name.len()].copy_from_slice(name);

        let mut allowed = DOT11_BSSID_LIST {
            Header: NDIS_OBJECT_HEADER {
                Type: NDIS_OBJECT_TYPE_DEFAULT as u8,
                Revision: DOT11_BSSID_LIST_REVISION_1 as u8,
                Size: size_of::<DOT11_BSSID_LIST>() as u16,
            },
            uNumOfEntries: 1,
            uTotalNumOfEntries: 1,
            BSSIDs: [request.allowed_bssids()[0].octets()],
        };

        let params = WLAN_CONNECTION_PARAMETERS {
            wlanConnectionMode: wlan_connection_mode_profile,
            strProfile: PCWSTR(profile.as_ptr()),
            pDot11Ssid: &mut ssid,
            pDesiredBssidList: &mut allowed,
            dot11BssType: dot11_BSS_type_infrastructure,
            dwFlags: 0,
        };

        // SAFETY: every pointer in `params` refers to a local that outlives the call.
        check(unsafe { WlanConnect(self.handle, &guid, &params, None) })
    }
}
