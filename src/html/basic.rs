pub const BASIC_PAGE: &str = r##"<!doctype html>
<html lang="en">

<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Olympic Host Locations</title>

  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>

  <style>
    body { margin: 0; font-family: Arial, Helvetica, sans-serif; }
    #layout { display: flex; height: 100vh; }
    #list { width: 30%; overflow-y: auto; padding: 20px; box-sizing: border-box; }
    #map { width: 70%; height: 100%; }
    .card { margin-bottom: 10px; padding: 10px; cursor: pointer; border-radius: 4px; }
    .card h3 { margin: 0; font-size: 1.05em; }
  </style>
</head>

<body>
  <div id="layout">
    <div id="list"></div>
    <div id="map"></div>
  </div>

  <script>
    const API = "/v1/dashboards/basic";

    const map = L.map("map");
    L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
      maxZoom: 19,
      attribution: "&copy; OpenStreetMap contributors",
    }).addTo(map);
    const markerLayer = L.layerGroup().addTo(map);

    function applyView(view) {
      markerLayer.clearLayers();
      for (const m of view.markers) {
        L.circleMarker([m.latitude, m.longitude], {
          radius: m.size,
          color: m.color,
          fillColor: m.color,
          fillOpacity: m.opacity,
          weight: 1,
        })
          .bindTooltip(m.hover)
          .on("click", () => sendClick("marker", m.index))
          .addTo(markerLayer);
      }

      const list = document.getElementById("list");
      list.replaceChildren();
      for (const c of view.cards) {
        const card = document.createElement("div");
        card.className = "card";
        card.id = "card-" + c.index;
        card.style.border = c.border;
        card.addEventListener("click", () => sendClick("list", c.index));

        const title = document.createElement("h3");
        title.textContent = c.title;
        card.appendChild(title);

        list.appendChild(card);
      }

      map.setView([view.camera.center_latitude, view.camera.center_longitude], view.camera.zoom);

      if (view.scroll_to != null) {
        const target = document.getElementById("card-" + view.scroll_to);
        if (target) target.scrollIntoView({ behavior: "smooth", block: "center" });
      }
    }

    async function sendClick(origin, index) {
      const response = await fetch(API + "/click", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ origin: origin, index: index }),
      });
      if (response.ok) {
        applyView((await response.json()).view);
      }
    }

    fetch(API + "/view")
      .then((response) => response.json())
      .then(applyView);
  </script>
</body>

</html>
"##;
